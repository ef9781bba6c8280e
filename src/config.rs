//! App Configuration
//!
//! Compile-time settings. There is no runtime config: nothing is persisted.

use log::LevelFilter;

/// Title shown in the header
pub const APP_TITLE: &str = "🌴 Far Away 💼";

/// Question above the new item form
pub const FORM_HEADING: &str = "What do you need for your 😍 trip?";

/// Placeholder of the description input
pub const DESCRIPTION_PLACEHOLDER: &str = "Item...";

/// Quantities offered by the form select
pub use packing_core::{DEFAULT_QUANTITY, MAX_QUANTITY};

/// Console log level in debug builds
#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Console log level in release builds
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
