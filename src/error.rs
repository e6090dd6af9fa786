//! Error types used by clients and the driver.
//!
//! This module defines:
//!
//! - [`ClientError`] - raised by a single client while handling one event.
//! - [`ClientFailure`] - a [`ClientError`] tagged with the client that raised it.
//! - [`DispatchError`] - returned by `Driver::emit*` when one or more clients failed.
//!
//! All types provide `as_label` for logging/metrics.

use thiserror::Error;

use crate::events::EventKind;

/// # Errors produced by a client.
///
/// Returned from [`Client::handle_event`](crate::Client::handle_event) and
/// [`AsyncClient::handle_event`](crate::AsyncClient::handle_event).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ClientError {
    /// The client could not handle the event.
    #[error("handler failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Exception raised by a Python `handle_event` implementation.
    #[cfg(feature = "python")]
    #[error(transparent)]
    Python(#[from] pyo3::PyErr),
}

impl ClientError {
    /// Shorthand for [`ClientError::Failed`].
    ///
    /// # Example
    /// ```
    /// use pyo3_question::ClientError;
    ///
    /// let err = ClientError::failed("disk full");
    /// assert_eq!(err.to_string(), "handler failed: disk full");
    /// ```
    pub fn failed(error: impl Into<String>) -> Self {
        ClientError::Failed {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ClientError::Failed { .. } => "client_failed",
            #[cfg(feature = "python")]
            ClientError::Python(_) => "client_python_exception",
        }
    }
}

/// A client error together with the position and name of the client.
#[derive(Error, Debug)]
#[error("client #{index} '{client}' failed: {source}")]
pub struct ClientFailure {
    /// Registration index of the client (0-based).
    pub index: usize,
    /// Client name as reported by `Client::name`.
    pub client: String,
    /// What the client returned.
    #[source]
    pub source: ClientError,
}

/// # Errors returned by event dispatch.
///
/// Which variant is produced depends on [`FailurePolicy`](crate::FailurePolicy):
/// - `FailFast` → [`DispatchError::Aborted`] on the first failing client;
/// - `Continue` → [`DispatchError::Partial`] after every client was called.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Dispatch stopped at the first failing client; later clients were not called.
    #[error("dispatch of {kind} aborted: {failure}")]
    Aborted {
        /// Kind of the event being dispatched.
        kind: EventKind,
        /// The failing client.
        #[source]
        failure: ClientFailure,
    },

    /// Every client was called; some of them failed.
    #[error("dispatch of {kind}: {} of {delivered} client(s) failed", .failures.len())]
    Partial {
        /// Kind of the event being dispatched.
        kind: EventKind,
        /// Number of clients the event was handed to.
        delivered: usize,
        /// Failures in registration order.
        failures: Vec<ClientFailure>,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pyo3_question::{ClientError, ClientFailure, DispatchError, EventKind};
    ///
    /// let err = DispatchError::Aborted {
    ///     kind: EventKind::EventA,
    ///     failure: ClientFailure { index: 0, client: "audit".into(), source: ClientError::failed("boom") },
    /// };
    /// assert_eq!(err.as_label(), "dispatch_aborted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Aborted { .. } => "dispatch_aborted",
            DispatchError::Partial { .. } => "dispatch_partial",
        }
    }

    /// Kind of the event whose dispatch failed.
    pub fn kind(&self) -> EventKind {
        match self {
            DispatchError::Aborted { kind, .. } | DispatchError::Partial { kind, .. } => *kind,
        }
    }

    /// All client failures carried by this error, in registration order.
    pub fn failures(&self) -> &[ClientFailure] {
        match self {
            DispatchError::Aborted { failure, .. } => std::slice::from_ref(failure),
            DispatchError::Partial { failures, .. } => failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(index: usize, client: &str) -> ClientFailure {
        ClientFailure {
            index,
            client: client.to_string(),
            source: ClientError::failed("boom"),
        }
    }

    #[test]
    fn test_client_labels() {
        let err = ClientError::failed("x");
        assert_eq!(err.as_label(), "client_failed");
        assert_eq!(err.to_string(), "handler failed: x");
    }

    #[test]
    fn test_aborted_message_names_client() {
        let err = DispatchError::Aborted {
            kind: EventKind::EventB,
            failure: failure(2, "audit"),
        };
        assert_eq!(
            err.to_string(),
            "dispatch of event_b aborted: client #2 'audit' failed: handler failed: boom"
        );
        assert_eq!(err.kind(), EventKind::EventB);
        assert_eq!(err.failures().len(), 1);
    }

    #[test]
    fn test_partial_counts_failures() {
        let err = DispatchError::Partial {
            kind: EventKind::EventA,
            delivered: 3,
            failures: vec![failure(0, "a"), failure(2, "c")],
        };
        assert_eq!(err.as_label(), "dispatch_partial");
        assert_eq!(err.to_string(), "dispatch of event_a: 2 of 3 client(s) failed");
        let idx: Vec<_> = err.failures().iter().map(|f| f.index).collect();
        assert_eq!(idx, vec![0, 2]);
    }
}
