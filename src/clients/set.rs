//! # ClientSet: non-blocking fan-out over async clients
//!
//! [`ClientSet`] distributes each [`Event`] to multiple [`AsyncClient`]s
//! **without awaiting** their processing.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns immediately.
//! - Per-client FIFO (queue order).
//! - Errors and panics inside clients are caught and logged (isolation).
//! - `shutdown()` drains what was already queued.
//!
//! ## What it does **not** guarantee
//! - No ordering across different clients.
//! - No retries on per-client queue overflow (events are dropped for that client).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        │                        (Copy per client)
//!        ├────────────────► [queue C1] ─► worker C1 ─► handle_event()
//!        ├────────────────► [queue C2] ─► worker C2 ─► handle_event()
//!        └────────────────► [queue CN] ─► worker CN ─► handle_event()
//! ```
//!
//! The set is owned by the caller, who must `shutdown()` it to drain the
//! queues. To feed it from a [`Driver`](crate::Driver), register a client
//! holding a shared handle (`Rc<ClientSet>`) and take the set back with
//! `Rc::try_unwrap` once the driver is dropped.

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{error, warn};

use crate::clients::AsyncClient;
use crate::events::Event;

/// Per-client channel with metadata.
struct ClientChannel {
    name: &'static str,
    sender: mpsc::Sender<Event>,
}

/// Composite fan-out with per-client bounded queues and worker tasks.
pub struct ClientSet {
    channels: Vec<ClientChannel>,
    workers: Vec<JoinHandle<()>>,
}

impl ClientSet {
    /// Creates a new set and spawns one worker per client.
    ///
    /// # Panics
    /// Panics when called outside of a tokio runtime.
    #[must_use]
    pub fn new(clients: Vec<Arc<dyn AsyncClient>>) -> Self {
        let mut channels = Vec::with_capacity(clients.len());
        let mut workers = Vec::with_capacity(clients.len());

        for client in clients {
            let cap = client.queue_capacity().max(1);
            let name = client.name();
            let (tx, rx) = mpsc::channel::<Event>(cap);

            workers.push(tokio::spawn(worker(client, rx)));
            channels.push(ClientChannel { name, sender: tx });
        }

        Self { channels, workers }
    }

    /// Fan-out one event to all clients (non-blocking).
    ///
    /// Returns how many queues accepted the event. If a client's queue is
    /// **full** or **closed**, the event is dropped for it and a warning is
    /// logged with the client's name.
    pub fn emit(&self, event: &Event) -> usize {
        let mut accepted = 0;

        for channel in &self.channels {
            match channel.sender.try_send(*event) {
                Ok(()) => accepted += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(client = channel.name, kind = %event.kind(), "event dropped: queue full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    warn!(client = channel.name, kind = %event.kind(), "event dropped: worker closed");
                }
            }
        }
        accepted
    }

    /// Graceful shutdown: close all queues and await worker completion.
    ///
    /// Events queued before the call are still handled.
    pub async fn shutdown(self) {
        drop(self.channels);
        for h in self.workers {
            let _ = h.await;
        }
    }

    /// True if there are no clients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

async fn worker(client: Arc<dyn AsyncClient>, mut rx: mpsc::Receiver<Event>) {
    while let Some(ev) = rx.recv().await {
        let fut = client.handle_event(&ev);
        match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                warn!(client = client.name(), kind = %ev.kind(), label = err.as_label(), "client failed: {err}");
            }
            Err(panic_err) => {
                error!(client = client.name(), kind = %ev.kind(), "client panicked: {}", panic_message(&*panic_err));
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::{clients::ClientFn, core::Driver, error::ClientError};

    struct Recorder {
        name: &'static str,
        cap: usize,
        seen: Arc<Mutex<Vec<Event>>>,
    }

    #[async_trait]
    impl AsyncClient for Recorder {
        async fn handle_event(&self, event: &Event) -> Result<(), ClientError> {
            self.seen.lock().unwrap().push(*event);
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.name
        }

        fn queue_capacity(&self) -> usize {
            self.cap
        }
    }

    struct Panicky;

    #[async_trait]
    impl AsyncClient for Panicky {
        async fn handle_event(&self, event: &Event) -> Result<(), ClientError> {
            if let Event::EventA(_) = event {
                panic!("boom");
            }
            Ok(())
        }
    }

    fn recorder(name: &'static str, cap: usize) -> (Arc<dyn AsyncClient>, Arc<Mutex<Vec<Event>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client: Arc<dyn AsyncClient> = Arc::new(Recorder {
            name,
            cap,
            seen: Arc::clone(&seen),
        });
        (client, seen)
    }

    #[tokio::test]
    async fn test_per_client_fifo_and_drain() {
        let (c1, seen1) = recorder("one", 16);
        let (c2, seen2) = recorder("two", 16);
        let set = ClientSet::new(vec![c1, c2]);
        assert_eq!(set.len(), 2);

        assert_eq!(set.emit(&Event::a(1, true)), 2);
        assert_eq!(set.emit(&Event::b(2.5, 2)), 2);
        assert_eq!(set.emit(&Event::a(3, false)), 2);
        set.shutdown().await;

        let expected = vec![Event::a(1, true), Event::b(2.5, 2), Event::a(3, false)];
        assert_eq!(*seen1.lock().unwrap(), expected);
        assert_eq!(*seen2.lock().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_overflow_drops_for_saturated_client_only() {
        // current_thread runtime: workers don't run until we yield, so queues fill up.
        let (small, seen_small) = recorder("small", 1);
        let (big, seen_big) = recorder("big", 8);
        let set = ClientSet::new(vec![small, big]);

        assert_eq!(set.emit(&Event::a(1, true)), 2);
        assert_eq!(set.emit(&Event::a(2, true)), 1);
        set.shutdown().await;

        assert_eq!(*seen_small.lock().unwrap(), vec![Event::a(1, true)]);
        assert_eq!(seen_big.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_driver_forwarded_events_are_drained_on_shutdown() {
        let (rec, seen) = recorder("rec", 16);
        let set = Rc::new(ClientSet::new(vec![rec]));

        let forward = Rc::clone(&set);
        let mut driver = Driver::new(vec![ClientFn::boxed("forward", move |ev: &Event| {
            if forward.emit(ev) == forward.len() {
                Ok(())
            } else {
                Err(ClientError::failed("async queue rejected event"))
            }
        })]);
        driver.emit_event_a(100, false).unwrap();
        driver.emit_event_b(3.4, 20).unwrap();
        drop(driver);

        let set = Rc::try_unwrap(set).ok().expect("driver released its handle");
        set.shutdown().await;

        assert_eq!(*seen.lock().unwrap(), vec![Event::a(100, false), Event::b(3.4, 20)]);
    }

    #[tokio::test]
    async fn test_panic_is_isolated() {
        let (rec, seen) = recorder("rec", 8);
        let panicky: Arc<dyn AsyncClient> = Arc::new(Panicky);
        let set = ClientSet::new(vec![panicky, rec]);

        set.emit(&Event::a(1, true));
        set.emit(&Event::b(1.0, 1));
        set.shutdown().await;

        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_set() {
        let set = ClientSet::new(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.emit(&Event::a(0, false)), 0);
        set.shutdown().await;
    }
}
