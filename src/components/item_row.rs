//! Item Row Component
//!
//! One list entry with its toggle and delete controls.

use leptos::prelude::*;
use packing_core::Item;

use crate::store::{store_delete_item, store_toggle_item, use_app_store};

/// A single item row in the list
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let label = item.label();

    view! {
        <li class="item-row">
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| {
                    store_toggle_item(&store, id);
                }
            />
            <span
                class=if packed { "item-text packed" } else { "item-text" }
                style=if packed { "text-decoration: line-through;" } else { "" }
            >
                {label}
            </span>
            <button class="delete-btn" on:click=move |_| {
                store_delete_item(&store, id);
            }>"❌"</button>
        </li>
    }
}
