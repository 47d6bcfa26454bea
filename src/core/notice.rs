//! Transient notice state with explicit expiry tokens
//!
//! At most one notice is visible at a time and it always disappears on its
//! own. Each `show` hands out a generation token; the scheduled dismiss
//! task carries its token back into `expire`, so a timer that was
//! superseded by a newer `show` can never clear the newer message.

/// How long a notice stays visible, in milliseconds.
pub const NOTICE_DISMISS_MS: u32 = 3200;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    message: Option<String>,
    generation: u64,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any visible notice and return the token the dismiss task
    /// must present to [`NoticeState::expire`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.generation += 1;
        self.generation
    }

    /// Clear the notice, but only if `token` still names the latest `show`.
    pub fn expire(&mut self, token: u64) {
        if token == self.generation {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
