//! # Driver: in-order synchronous fan-out.
//!
//! The [`Driver`] owns an ordered list of clients, fixed at construction.
//! Each `emit*` call builds one [`Event`] and hands it to every client, in
//! registration order, on the caller's thread.
//!
//! ## Flow
//! ```text
//! emit_event_a(a1, a2) ──► Event::EventA { a1, a2 }
//!                               │
//!                               ├─► client[0].handle_event(&ev)
//!                               ├─► client[1].handle_event(&ev)
//!                               │     └─ Err ──► FailFast: return Aborted
//!                               │                Continue: record, go on
//!                               └─► client[N].handle_event(&ev)
//!
//! return Ok(()) | Err(Partial { failures })
//! ```
//!
//! With zero clients every emit is a no-op returning `Ok(())`.

use tracing::{trace, warn};

use crate::{
    clients::Client,
    core::{Config, FailurePolicy},
    error::{ClientFailure, DispatchError},
    events::Event,
};

use super::builder::DriverBuilder;

/// Builds events and delivers them to every registered client, in order.
pub struct Driver {
    cfg: Config,
    clients: Vec<Box<dyn Client>>,
}

impl Driver {
    /// Creates a driver with the default [`Config`] (fail-fast).
    ///
    /// Clients are stored exactly as given: no deduplication, no reordering.
    pub fn new(clients: Vec<Box<dyn Client>>) -> Self {
        Self::new_internal(Config::default(), clients)
    }

    /// Returns a builder for a driver with a custom [`Config`].
    pub fn builder(cfg: Config) -> DriverBuilder {
        DriverBuilder::new(cfg)
    }

    pub(super) fn new_internal(cfg: Config, clients: Vec<Box<dyn Client>>) -> Self {
        Self { cfg, clients }
    }

    /// Emits `EventA { field_a1, field_a2 }` to every client.
    pub fn emit_event_a(&mut self, field_a1: i64, field_a2: bool) -> Result<(), DispatchError> {
        self.emit(Event::a(field_a1, field_a2))
    }

    /// Emits `EventB { field_b1, field_b2 }` to every client.
    pub fn emit_event_b(&mut self, field_b1: f64, field_b2: i32) -> Result<(), DispatchError> {
        self.emit(Event::b(field_b1, field_b2))
    }

    /// Delivers `event` to every client in registration order.
    ///
    /// The event lives for this call only; clients see it by reference.
    pub fn emit(&mut self, event: Event) -> Result<(), DispatchError> {
        let kind = event.kind();
        trace!(%kind, clients = self.clients.len(), "dispatching event");

        let mut failures = Vec::new();
        for (index, client) in self.clients.iter_mut().enumerate() {
            let Err(source) = client.handle_event(&event) else {
                continue;
            };
            let failure = ClientFailure {
                index,
                client: client.name().to_owned(),
                source,
            };
            warn!(
                %kind,
                index,
                client = %failure.client,
                label = failure.source.as_label(),
                policy = self.cfg.failure.as_str(),
                "client failed: {}",
                failure.source
            );

            match self.cfg.failure {
                FailurePolicy::FailFast => return Err(DispatchError::Aborted { kind, failure }),
                FailurePolicy::Continue => failures.push(failure),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Partial {
                kind,
                delivered: self.clients.len(),
                failures,
            })
        }
    }

    /// Configuration this driver was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of registered clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// True if no clients are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.clients.iter().map(|c| c.name()).collect();
        f.debug_struct("Driver")
            .field("cfg", &self.cfg)
            .field("clients", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::{clients::ClientFn, error::ClientError, events::EventKind};

    type Log = Rc<RefCell<Vec<(&'static str, Event)>>>;

    fn recording(name: &'static str, log: &Log) -> Box<dyn Client> {
        let log = Rc::clone(log);
        ClientFn::boxed(name, move |ev: &Event| {
            log.borrow_mut().push((name, *ev));
            Ok(())
        })
    }

    fn failing(name: &'static str, log: &Log) -> Box<dyn Client> {
        let log = Rc::clone(log);
        ClientFn::boxed(name, move |ev: &Event| {
            log.borrow_mut().push((name, *ev));
            Err(ClientError::failed("boom"))
        })
    }

    #[test]
    fn test_single_client_receives_exact_fields() {
        let log = Log::default();
        let mut driver = Driver::new(vec![recording("c1", &log)]);

        driver.emit_event_a(100, false).unwrap();
        driver.emit_event_b(3.4, 20).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![("c1", Event::a(100, false)), ("c1", Event::b(3.4, 20))]
        );
    }

    #[test]
    fn test_zero_clients_is_noop() {
        let mut driver = Driver::new(Vec::new());
        assert!(driver.is_empty());
        assert!(driver.emit_event_a(100, false).is_ok());
        assert!(driver.emit_event_b(3.4, 20).is_ok());
    }

    #[test]
    fn test_registration_order() {
        let log = Log::default();
        let mut driver = Driver::new(vec![
            recording("first", &log),
            recording("second", &log),
            recording("third", &log),
        ]);
        assert_eq!(driver.len(), 3);

        driver.emit_event_a(7, true).unwrap();

        let order: Vec<_> = log.borrow().iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
        assert!(log.borrow().iter().all(|(_, ev)| *ev == Event::a(7, true)));
    }

    #[test]
    fn test_same_client_twice_gets_event_twice() {
        let log = Log::default();
        let mut driver = Driver::new(vec![recording("dup", &log), recording("dup", &log)]);
        driver.emit_event_b(0.5, -1).unwrap();
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_fail_fast_skips_remaining_clients() {
        let log = Log::default();
        let mut driver = Driver::new(vec![
            recording("ok", &log),
            failing("bad", &log),
            recording("never", &log),
        ]);

        let err = driver.emit_event_a(1, true).unwrap_err();
        match &err {
            DispatchError::Aborted { kind, failure } => {
                assert_eq!(*kind, EventKind::EventA);
                assert_eq!(failure.index, 1);
                assert_eq!(failure.client, "bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let order: Vec<_> = log.borrow().iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["ok", "bad"]);
    }

    #[test]
    fn test_continue_collects_every_failure() {
        let log = Log::default();
        let mut driver = Driver::builder(Config::continue_on_error())
            .with_clients(vec![
                failing("a", &log),
                recording("b", &log),
                failing("c", &log),
            ])
            .build();

        let err = driver.emit_event_b(2.0, 3).unwrap_err();
        assert_eq!(err.as_label(), "dispatch_partial");
        assert_eq!(err.kind(), EventKind::EventB);
        let failed: Vec<_> = err.failures().iter().map(|f| (f.index, f.client.as_str())).collect();
        assert_eq!(failed, vec![(0, "a"), (2, "c")]);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_builder_appends_clients() {
        let log = Log::default();
        let log2 = Rc::clone(&log);
        let mut driver = Driver::builder(Config::default())
            .with_clients(vec![recording("x", &log)])
            .with_client(ClientFn::new("y", move |ev: &Event| {
                log2.borrow_mut().push(("y", *ev));
                Ok::<_, ClientError>(())
            }))
            .build();

        driver.emit(Event::a(5, false)).unwrap();
        let order: Vec<_> = log.borrow().iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["x", "y"]);
        assert_eq!(driver.config().failure, FailurePolicy::FailFast);
    }

    #[test]
    fn test_stateful_client_keeps_state_between_emits() {
        struct Counter(Rc<RefCell<u32>>);
        impl Client for Counter {
            fn handle_event(&mut self, _event: &Event) -> Result<(), ClientError> {
                *self.0.borrow_mut() += 1;
                Ok(())
            }
        }

        let count = Rc::new(RefCell::new(0));
        let mut driver = Driver::new(vec![Box::new(Counter(Rc::clone(&count)))]);
        driver.emit_event_a(1, true).unwrap();
        driver.emit_event_b(1.0, 1).unwrap();
        driver.emit_event_a(2, false).unwrap();
        assert_eq!(*count.borrow(), 3);
        assert!(format!("{driver:?}").contains("Counter"));
    }
}
