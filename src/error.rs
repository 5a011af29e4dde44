//! Error catalog and the error types shared across the crate.
//!
//! Every failure an order operation can report resolves to exactly one
//! [`ErrorKind`]. The kind decides the status code and message a caller
//! renders; nothing else is carried across the service boundary.

use serde::Serialize;
use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Symbolic error kinds known to the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyResult,
    OrderNotFound,
    ItemNotFound,
    PaymentsNotFound,
    NetworkFail,
    CardLimitExceeded,
    MagneticNotRecognized,
    ResponseDelay,
    CategoryNotFound,
}

/// Status code and message attached to an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDetail {
    pub status_code: u16,
    pub message: &'static str,
}

impl ErrorKind {
    #[cfg(test)]
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::EmptyResult,
        ErrorKind::OrderNotFound,
        ErrorKind::ItemNotFound,
        ErrorKind::PaymentsNotFound,
        ErrorKind::NetworkFail,
        ErrorKind::CardLimitExceeded,
        ErrorKind::MagneticNotRecognized,
        ErrorKind::ResponseDelay,
        ErrorKind::CategoryNotFound,
    ];

    pub const fn detail(self) -> ErrorDetail {
        let (status_code, message) = match self {
            ErrorKind::EmptyResult => (500, "Failed to load data."),
            ErrorKind::OrderNotFound => (404, "The order could not be found."),
            ErrorKind::ItemNotFound => (404, "The item could not be found."),
            ErrorKind::PaymentsNotFound => (404, "The payment method could not be found."),
            ErrorKind::NetworkFail => (503, "Payment failed due to a network error."),
            ErrorKind::CardLimitExceeded => {
                (503, "Payment failed because the card limit was exceeded.")
            }
            ErrorKind::MagneticNotRecognized => (
                503,
                "Payment failed because the card's magnetic stripe could not be read.",
            ),
            ErrorKind::ResponseDelay => (503, "The response is delayed. Please try again later."),
            ErrorKind::CategoryNotFound => (404, "The category could not be found."),
        };
        ErrorDetail { status_code, message }
    }

    pub const fn status_code(self) -> u16 {
        self.detail().status_code
    }

    pub const fn message(self) -> &'static str {
        self.detail().message
    }
}

/// Domain-level failure returned by every order operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("[{}] {}", .kind.status_code(), .kind.message())]
pub struct BusinessError {
    kind: ErrorKind,
}

impl BusinessError {
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub const fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Body a request handler renders for this error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            status_code: self.status_code(),
            message: self.message(),
        }
    }
}

impl From<ErrorKind> for BusinessError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// An unreachable store surfaces to callers as a failed data load.
impl From<StoreError> for BusinessError {
    fn from(_: StoreError) -> Self {
        Self::new(ErrorKind::EmptyResult)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: &'static str,
}

/// Errors raised by an order store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        StoreError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_status_codes() {
        let codes: Vec<(ErrorKind, u16)> = ErrorKind::ALL
            .iter()
            .map(|kind| (*kind, kind.status_code()))
            .collect();

        assert_eq!(
            codes,
            vec![
                (ErrorKind::EmptyResult, 500),
                (ErrorKind::OrderNotFound, 404),
                (ErrorKind::ItemNotFound, 404),
                (ErrorKind::PaymentsNotFound, 404),
                (ErrorKind::NetworkFail, 503),
                (ErrorKind::CardLimitExceeded, 503),
                (ErrorKind::MagneticNotRecognized, 503),
                (ErrorKind::ResponseDelay, 503),
                (ErrorKind::CategoryNotFound, 404),
            ]
        );
    }

    #[test]
    fn catalog_messages_are_distinct() {
        let mut messages: Vec<&str> = ErrorKind::ALL.iter().map(|kind| kind.message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn business_error_renders_kind() {
        let error = BusinessError::from(ErrorKind::OrderNotFound);

        assert_eq!(error.kind(), ErrorKind::OrderNotFound);
        assert_eq!(error.to_string(), "[404] The order could not be found.");
        assert_eq!(
            error.body(),
            ErrorBody { status_code: 404, message: "The order could not be found." }
        );

        let json = serde_json::to_value(error.body()).unwrap();
        assert_eq!(json["status_code"], 404);
    }

    #[test]
    fn store_failure_maps_to_empty_result() {
        let store_error = StoreError::from(FrameworkError::ActorClosed);
        assert_eq!(store_error.to_string(), "Actor communication error: Actor closed");

        let error = BusinessError::from(store_error);
        assert_eq!(error.kind(), ErrorKind::EmptyResult);
        assert_eq!(error.status_code(), 500);
    }
}
