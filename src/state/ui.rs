//! Local UI state for the login form.
//!
//! DESIGN
//! ======
//! Kept apart from the auth store so a half-typed token or a stale notice
//! never counts as session state. Reset to default on logout.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Token text currently in the login form.
    pub token_draft: String,
    /// One-line message shown under the login form.
    pub notice: Option<String>,
}

impl UiState {
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn clear_draft(&mut self) {
        self.token_draft.clear();
        self.notice = None;
    }
}
