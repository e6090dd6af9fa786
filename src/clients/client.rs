//! # Client trait.
//!
//! Provides [`Client`], the extension point the [`Driver`](crate::Driver)
//! fans events out to.
//!
//! ## Rules
//! - Called synchronously, on the thread that called `emit*`.
//! - Called once per emitted event, in registration order.
//! - Returning `Err` stops the fan-out under `FailurePolicy::FailFast`
//!   (the default); under `FailurePolicy::Continue` the remaining clients
//!   still run and the error is collected.
//!
//! ## Example
//! ```rust
//! use pyo3_question::{Client, ClientError, Driver, Event, EventA, EventB};
//!
//! #[derive(Default)]
//! struct Totals {
//!     a: i64,
//!     b: f64,
//! }
//!
//! impl Client for Totals {
//!     fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
//!         match event {
//!             Event::EventA(EventA { field_a1, .. }) => self.a += field_a1,
//!             Event::EventB(EventB { field_b1, .. }) => self.b += field_b1,
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "totals" }
//! }
//!
//! let mut driver = Driver::new(vec![Box::new(Totals::default())]);
//! driver.emit_event_a(100, false).unwrap();
//! driver.emit_event_b(3.4, 20).unwrap();
//! ```

use crate::error::ClientError;
use crate::events::Event;

/// Synchronous event handler registered with a [`Driver`](crate::Driver).
///
/// `Send` is not required: the driver never moves clients across threads.
pub trait Client {
    /// Handles a single event.
    ///
    /// The event is borrowed for the duration of the call only.
    fn handle_event(&mut self, event: &Event) -> Result<(), ClientError>;

    /// Returns the client name used in logs and in [`ClientFailure`](crate::ClientFailure).
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
