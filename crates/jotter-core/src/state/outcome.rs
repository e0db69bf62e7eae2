//! The single result value an interactor produces per invocation

use super::StateEvent;

/// How the operation resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    SuccessWithData,
    SuccessWithoutData,
    Error,
}

/// Tone of the user-facing message.
///
/// A mutation that affected no rows is a normal outcome with an `Error`
/// tone, not an `Error` disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
    None,
}

/// Outcome of one interactor call: disposition, message, optional payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub event: StateEvent,
    pub disposition: Disposition,
    pub message: String,
    pub kind: MessageKind,
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// A resolved outcome; the disposition follows from whether data is present
    pub fn data(
        event: &StateEvent,
        message: impl Into<String>,
        kind: MessageKind,
        data: Option<T>,
    ) -> Self {
        let disposition = if data.is_some() {
            Disposition::SuccessWithData
        } else {
            Disposition::SuccessWithoutData
        };
        Self {
            event: event.clone(),
            disposition,
            message: message.into(),
            kind,
            data,
        }
    }

    /// An error outcome, never carrying data
    pub fn error(event: &StateEvent, message: impl Into<String>) -> Self {
        Self {
            event: event.clone(),
            disposition: Disposition::Error,
            message: message.into(),
            kind: MessageKind::Error,
            data: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.disposition == Disposition::Error
    }

    /// True when the message is exactly `expected`; gates remote propagation
    pub fn has_message(&self, expected: &str) -> bool {
        self.message == expected
    }
}
