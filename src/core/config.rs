//! # Driver configuration.
//!
//! Provides [`Config`], the settings a [`Driver`](crate::Driver) is built with,
//! and [`FailurePolicy`], which decides what a client error does to the rest
//! of the fan-out.
//!
//! ```rust
//! use pyo3_question::{Config, Driver, FailurePolicy};
//!
//! let cfg = Config { failure: FailurePolicy::Continue };
//! let driver = Driver::builder(cfg).build();
//! assert_eq!(driver.config().failure, FailurePolicy::Continue);
//! ```

/// What the driver does when a client returns an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the first error immediately; later clients don't see the event.
    #[default]
    FailFast,
    /// Deliver to every client, then report all errors together.
    Continue,
}

impl FailurePolicy {
    /// Returns a short stable label (snake_case) for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::FailFast => "fail_fast",
            FailurePolicy::Continue => "continue",
        }
    }
}

/// Driver configuration.
///
/// All fields are public; [`Config::default`] gives fail-fast dispatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Reaction to a failing client.
    ///
    /// - `FailFast` → `DispatchError::Aborted`, remaining clients skipped
    /// - `Continue` → `DispatchError::Partial` after all clients ran
    pub failure: FailurePolicy,
}

impl Config {
    /// Shorthand for a config that keeps dispatching after failures.
    #[inline]
    pub fn continue_on_error() -> Self {
        Self {
            failure: FailurePolicy::Continue,
        }
    }
}
