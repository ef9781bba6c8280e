//! Browser Dialogs
//!
//! `Confirm` backed by the blocking `window.confirm` prompt.

use packing_core::Confirm;

/// Asks through `window.confirm`. Without a window the answer is "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("No window available, treating confirm as cancelled");
            return false;
        };
        window.confirm_with_message(prompt).unwrap_or_else(|e| {
            log::error!("window.confirm failed: {:?}", e);
            false
        })
    }
}
