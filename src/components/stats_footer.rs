//! Stats Footer Component

use leptos::prelude::*;
use packing_core::Stats;

use crate::store::{use_app_store, AppStateStoreFields};

/// Footer line derived from the current snapshot
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| Stats::from_items(&store.items().get()));

    view! {
        <footer class="stats">
            <em>{move || stats.get().message()}</em>
        </footer>
    }
}
