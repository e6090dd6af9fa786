//! # Asynchronous client trait.
//!
//! Provides [`AsyncClient`], the handler type driven by [`ClientSet`](crate::ClientSet).
//!
//! Each async client gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-client bounded queue** (capacity via [`AsyncClient::queue_capacity`])
//! - **Panic isolation** (panics are caught and logged; the worker keeps going)
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use pyo3_question::{AsyncClient, ClientError, Event};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl AsyncClient for Audit {
//!     async fn handle_event(&self, ev: &Event) -> Result<(), ClientError> {
//!         let _ = ev; // ship it somewhere
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str { "audit" }
//!     fn queue_capacity(&self) -> usize { 64 }
//! }
//! ```

use async_trait::async_trait;

use crate::error::ClientError;
use crate::events::Event;

/// Event handler running on its own worker task.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Errors are logged by the worker and otherwise dropped.
/// - Slow processing affects only this client's queue.
#[async_trait]
pub trait AsyncClient: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Events are delivered in FIFO order per client.
    async fn handle_event(&self, event: &Event) -> Result<(), ClientError>;

    /// Returns the client name used in logs and overflow errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity for this client.
    ///
    /// Clamped to a minimum of 1. Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
