//! Event payloads.
//!
//! ## Contents
//! - [`Event`] closed set of occurrences a [`Driver`](crate::Driver) can emit
//! - [`EventA`], [`EventB`] payload structs
//! - [`EventKind`] payload-free classification for logs and errors

mod event;

pub use event::{Event, EventA, EventB, EventKind};
