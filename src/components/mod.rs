//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod new_item_form;
mod packing_list_view;
mod item_row;
mod stats_footer;

pub use logo::Logo;
pub use new_item_form::NewItemForm;
pub use packing_list_view::PackingListView;
pub use item_row::ItemRow;
pub use stats_footer::StatsFooter;
