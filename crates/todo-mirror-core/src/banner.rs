//! One-slot transient error message shown to the user.

/// Holds at most one live user-facing error message.
///
/// A new message replaces the old one; nothing is queued and no history is
/// kept. The sync service is the only writer; dismissal belongs to the
/// caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    /// Empty banner.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Replace the current message.
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Dismiss the current message.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// The live message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
