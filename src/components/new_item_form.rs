//! New Item Form Component
//!
//! Collects a description and a quantity and adds the item on submit.

use leptos::prelude::*;
use packing_core::ItemDraft;

use crate::config::{DEFAULT_QUANTITY, DESCRIPTION_PLACEHOLDER, FORM_HEADING, MAX_QUANTITY};
use crate::store::{store_submit_draft, use_app_store};

/// Form for adding items to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);
    // Inline hint after a rejected submit, cleared on the next edit
    let (hint, set_hint) = signal::<Option<String>>(None);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(description.get(), quantity.get());
        match store_submit_draft(&store, draft) {
            Ok(_) => {
                set_description.set(String::new());
                set_quantity.set(DEFAULT_QUANTITY);
                set_hint.set(None);
            }
            Err(e) => {
                log::debug!("Draft rejected: {}", e);
                set_hint.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>{FORM_HEADING}</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_quantity.set(value.parse().unwrap_or(DEFAULT_QUANTITY));
                    set_hint.set(None);
                }
            >
                {(1..=MAX_QUANTITY).map(|n| view! {
                    <option value=n.to_string()>{n}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder=DESCRIPTION_PLACEHOLDER
                prop:value=move || description.get()
                on:input=move |ev| {
                    set_description.set(event_target_value(&ev));
                    set_hint.set(None);
                }
            />
            <button type="submit">"Add"</button>
            {move || hint.get().map(|text| view! { <p class="form-hint">{text}</p> })}
        </form>
    }
}
