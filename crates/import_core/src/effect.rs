use crate::{DroppedFile, ScrapeRequest, Stack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a user-visible message.
    Notify { kind: NotifyKind, message: String },
    /// Hand the buffer to the caller's import callback.
    ImportCode { code: String, stack: Stack },
    /// Start one scrape round-trip. Must be answered by `ScrapeSettled` or `ScrapeAbandoned`.
    Scrape(ScrapeRequest),
    /// Read the whole file and answer with `FileRead`.
    ReadFile(DroppedFile),
}

impl Effect {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        Effect::Notify {
            kind: NotifyKind::Error,
            message: message.into(),
        }
    }

    pub(crate) fn success(message: impl Into<String>) -> Self {
        Effect::Notify {
            kind: NotifyKind::Success,
            message: message.into(),
        }
    }
}
