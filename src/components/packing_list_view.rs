//! Packing List View Component
//!
//! Renders the current snapshot in the chosen sort order, plus the list
//! actions (sort select, clear button).

use leptos::prelude::*;
use packing_core::Item;

use crate::components::ItemRow;
use crate::dialog::WindowConfirm;
use crate::sort::{sorted_items, SortBy, SORT_OPTIONS};
use crate::store::{store_clear_items, use_app_store, AppStateStoreFields};

#[component]
pub fn PackingListView() -> impl IntoView {
    let store = use_app_store();
    // Display preference only, the store keeps insertion order
    let (sort_by, set_sort_by) = signal(SortBy::default());

    let rows = Memo::new(move |_| {
        let list = store.items().get();
        sorted_items(list.items(), sort_by.get())
            .into_iter()
            .cloned()
            .collect::<Vec<Item>>()
    });

    view! {
        <div class="list">
            <ul>
                <For
                    each=move || rows.get()
                    // packed is part of the key so a toggled row re-renders
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>

            <div class="actions">
                <select
                    prop:value=move || sort_by.get().as_str().to_string()
                    on:change=move |ev| set_sort_by.set(SortBy::from_str(&event_target_value(&ev)))
                >
                    {SORT_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=value.as_str()>{*label}</option>
                    }).collect_view()}
                </select>
                <button on:click=move |_| {
                    store_clear_items(&store, &WindowConfirm);
                }>"Clear list"</button>
            </div>
        </div>
    }
}
