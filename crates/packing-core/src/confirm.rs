//! Confirmation Capability
//!
//! Destructive transitions ask before they run. The question goes through
//! this trait so a browser dialog, a terminal prompt or a test stub can
//! answer it.

/// Prompt shown before the whole list is cleared
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// Answers a yes/no question
pub trait Confirm {
    /// Returns true when the user agreed
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
