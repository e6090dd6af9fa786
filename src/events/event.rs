//! # Event payloads delivered to clients.
//!
//! [`Event`] is a closed set of variants. Each variant wraps a plain payload
//! struct ([`EventA`], [`EventB`]) so clients can match on it exhaustively:
//!
//! ```rust
//! use pyo3_question::{Event, EventA, EventB, EventKind};
//!
//! let ev = Event::a(100, false);
//! assert_eq!(ev.kind(), EventKind::EventA);
//!
//! match ev {
//!     Event::EventA(EventA { field_a1, field_a2 }) => {
//!         assert_eq!(field_a1, 100);
//!         assert!(!field_a2);
//!     }
//!     Event::EventB(EventB { .. }) => unreachable!(),
//! }
//! ```
//!
//! Events are `Copy` and handed to clients as `&Event`, so a client can read
//! the fields but never change what the next client sees.

use std::fmt;

/// Payload of [`Event::EventA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventA {
    pub field_a1: i64,
    pub field_a2: bool,
}

/// Payload of [`Event::EventB`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventB {
    pub field_b1: f64,
    pub field_b2: i32,
}

/// A single occurrence fanned out by the [`Driver`](crate::Driver).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    EventA(EventA),
    EventB(EventB),
}

impl Event {
    /// Builds an [`Event::EventA`].
    #[inline]
    #[must_use]
    pub fn a(field_a1: i64, field_a2: bool) -> Self {
        Event::EventA(EventA { field_a1, field_a2 })
    }

    /// Builds an [`Event::EventB`].
    #[inline]
    #[must_use]
    pub fn b(field_b1: f64, field_b2: i32) -> Self {
        Event::EventB(EventB { field_b1, field_b2 })
    }

    /// Returns the variant tag of this event.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::EventA(_) => EventKind::EventA,
            Event::EventB(_) => EventKind::EventB,
        }
    }
}

impl From<EventA> for Event {
    fn from(ev: EventA) -> Self {
        Event::EventA(ev)
    }
}

impl From<EventB> for Event {
    fn from(ev: EventB) -> Self {
        Event::EventB(ev)
    }
}

/// Classification of events, without payload.
///
/// Used in errors and logs where the payload itself is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    EventA,
    EventB,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for logs/metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::EventA => "event_a",
            EventKind::EventB => "event_b",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
