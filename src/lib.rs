//! # pyo3-question
//!
//! A closed set of event payloads and a **Driver** that fans every emitted
//! event out to an ordered list of clients. The same core backs the
//! `pyo3_question` Python extension (feature `python`).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!        emit_event_a(a1, a2)        emit_event_b(b1, b2)
//!                 │                           │
//!                 ▼                           ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Driver                                                           │
//! │  - builds Event::EventA / Event::EventB                           │
//! │  - Config { failure: FailFast | Continue }                        │
//! │  - Vec<Box<dyn Client>> (fixed, registration order)               │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!   client[0]          client[1]          client[N]        (synchronous, in order)
//!   LogWriter          ClientFn           Custom
//!
//! ClientSet (owned by the caller) ──► [queue] ─► AsyncClient worker
//!                                 ──► [queue] ─► AsyncClient worker
//! ```
//!
//! ### Delivery
//! ```text
//! for client in clients (registration order) {
//!   ├─► client.handle_event(&event)
//!   │       ├─ Ok  ──► next client
//!   │       └─ Err ──► FailFast: return DispatchError::Aborted
//!   │                  Continue: record ClientFailure, next client
//! }
//! any recorded failures ──► DispatchError::Partial
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                        |
//! |-------------------|--------------------------------------------------------------|-------------------------------------------|
//! | **Events**        | Closed payload set, exhaustive matching.                     | [`Event`], [`EventA`], [`EventB`]         |
//! | **Clients**       | Synchronous handlers called in registration order.           | [`Client`], [`ClientFn`]                  |
//! | **Queued fan-out**| Per-client tokio workers with bounded queues.                | [`AsyncClient`], [`ClientSet`]            |
//! | **Dispatch**      | Builds events and delivers them.                             | [`Driver`], [`DriverBuilder`]             |
//! | **Errors**        | Typed client and dispatch errors.                            | [`ClientError`], [`DispatchError`]        |
//! | **Configuration** | Failure policy.                                              | [`Config`], [`FailurePolicy`]             |
//!
//! ## Optional features
//! - `logging` (default): exports the built-in [`LogWriter`] client.
//! - `python`: PyO3 classes `Client`, `Driver`, `EventA`, `EventB`.
//! - `extension-module`: `python` plus linking flags for building the wheel.
//!
//! ## Example
//! ```rust
//! use pyo3_question::{Client, ClientError, Driver, Event, EventA, EventB};
//!
//! struct MyClient;
//!
//! impl Client for MyClient {
//!     fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
//!         match event {
//!             Event::EventA(EventA { field_a1, field_a2 }) => println!("got A(a1={field_a1}, a2={field_a2})"),
//!             Event::EventB(EventB { field_b1, field_b2 }) => println!("got B(b1={field_b1}, b2={field_b2})"),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut driver = Driver::new(vec![Box::new(MyClient)]);
//! driver.emit_event_a(100, false)?;
//! driver.emit_event_b(3.4, 20)?;
//! # Ok::<(), pyo3_question::DispatchError>(())
//! ```
mod clients;
mod core;
mod error;
mod events;

#[cfg(feature = "python")]
mod python;

// ---- Public re-exports ----

pub use clients::{AsyncClient, Client, ClientFn, ClientSet};
pub use core::{Config, Driver, DriverBuilder, FailurePolicy};
pub use error::{ClientError, ClientFailure, DispatchError};
pub use events::{Event, EventA, EventB, EventKind};

// Optional: built-in printing client.
// Enable with: `--features logging` (on by default)
#[cfg(feature = "logging")]
pub use clients::LogWriter;

#[cfg(feature = "python")]
pub use python::{PyClient, PyDriver, PyEventA, PyEventB, PythonClient};
