use leptos::prelude::*;

use crate::config::APP_TITLE;

#[component]
pub fn Logo() -> impl IntoView {
    view! { <h1 class="logo">{APP_TITLE}</h1> }
}
