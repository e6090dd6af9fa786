//! # Closure-backed client (`ClientFn`)
//!
//! [`ClientFn`] wraps a closure `F: FnMut(&Event) -> Result<(), ClientError>`
//! under a fixed name, so small handlers don't need their own type.
//!
//! ## Example
//! ```rust
//! use pyo3_question::{ClientFn, Driver, Event};
//!
//! let mut driver = Driver::new(vec![
//!     ClientFn::boxed("printer", |ev: &Event| {
//!         println!("got {ev:?}");
//!         Ok(())
//!     }),
//! ]);
//! driver.emit_event_a(1, true).unwrap();
//! ```

use std::borrow::Cow;

use crate::clients::Client;
use crate::error::ClientError;
use crate::events::Event;

/// Function-backed client implementation.
pub struct ClientFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ClientFn<F> {
    /// Creates a new function-backed client.
    ///
    /// Prefer [`ClientFn::boxed`] when you immediately need a `Box<dyn Client>`.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> ClientFn<F>
where
    F: FnMut(&Event) -> Result<(), ClientError> + 'static,
{
    /// Creates the client and returns it boxed, ready for [`Driver::new`](crate::Driver::new).
    pub fn boxed(name: impl Into<Cow<'static, str>>, f: F) -> Box<dyn Client> {
        Box::new(Self::new(name, f))
    }
}

impl<F> Client for ClientFn<F>
where
    F: FnMut(&Event) -> Result<(), ClientError>,
{
    fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for ClientFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFn").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_call() {
        let mut seen = 0;
        {
            let mut client = ClientFn::new("counter", |_: &Event| {
                seen += 1;
                Ok::<_, ClientError>(())
            });
            assert_eq!(client.name(), "counter");
            client.handle_event(&Event::a(1, true)).unwrap();
            client.handle_event(&Event::b(1.0, 1)).unwrap();
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_error_passthrough() {
        let mut client = ClientFn::new("broken", |_: &Event| Err(ClientError::failed("nope")));
        let err = client.handle_event(&Event::a(0, false)).unwrap_err();
        assert_eq!(err.as_label(), "client_failed");
    }
}
