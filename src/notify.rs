//! User-facing failure notifications.
//!
//! The engine reports every failed operation through a [`NotificationSink`] using
//! one of four [`Notice`] categories. What the sink does with the message (a toast,
//! a status line, a log entry) is up to the embedding application.

use std::fmt;
use std::sync::Mutex;
use tracing::warn;

/// The four categories of user-facing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    AddFailed,
    RemoveFailed,
    UpdateFailed,
    OutOfStock,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::AddFailed => "Error adding product",
            Notice::RemoveFailed => "Error removing product",
            Notice::UpdateFailed => "Error changing product amount",
            Notice::OutOfStock => "Requested amount is out of stock",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver of user-facing error messages. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn report_error(&self, message: &str);

    fn notify(&self, notice: Notice) {
        self.report_error(notice.message());
    }
}

/// Sink that turns notices into `warn` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn report_error(&self, message: &str) {
        warn!(notice = message, "User notification");
    }
}

/// Sink that keeps every message in order, for polling UIs and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Removes and returns the recorded messages.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl NotificationSink for RecordingSink {
    fn report_error(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
