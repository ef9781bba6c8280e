//! Far Away App
//!
//! Root component: header, form, list and stats over one shared store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Logo, NewItemForm, PackingListView, StatsFooter};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // The list starts empty, nothing is loaded
    provide_context(Store::new(AppState::new()));
    log::info!("Packing list mounted");

    view! {
        <div class="app">
            <Logo />
            <NewItemForm />
            <PackingListView />
            <StatsFooter />
        </div>
    }
}
