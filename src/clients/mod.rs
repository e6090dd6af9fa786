//! # Event clients.
//!
//! This module provides the [`Client`] trait and built-in implementations
//! for handling events fanned out by the [`Driver`](crate::Driver).
//!
//! ## Architecture
//! ```text
//! Driver::emit_event_a(..) ──► Event::EventA ──► for each client, in order:
//!                                                  │
//!                                                  ├──► Client::handle_event(&Event)
//!                                                  │         │
//!                                                  │    ┌────┴─────┬──────────┐
//!                                                  │    ▼          ▼          ▼
//!                                                  │  LogWriter  ClientFn   Custom
//!                                                  └──► first Err stops the loop (FailFast)
//!
//! ClientSet::emit(&Event) ──► [queue] ─► worker ─► AsyncClient::handle_event(&Event)
//!                         ──► [queue] ─► worker ─► ...
//! ClientSet::shutdown().await  (drains queues, joins workers)
//! ```
//!
//! ## Client types
//! - **Synchronous clients** ([`Client`]) - called inline, in registration order
//! - **Queued clients** ([`AsyncClient`] inside a [`ClientSet`]) - called on their own
//!   tokio worker, FIFO per client; the caller owns the set and shuts it down

mod async_client;
mod client;
mod client_fn;
#[cfg(feature = "logging")]
mod embedded;
mod set;

pub use async_client::AsyncClient;
pub use client::Client;
pub use client_fn::ClientFn;
#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use set::ClientSet;
