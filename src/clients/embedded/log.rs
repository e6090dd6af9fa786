//! # LogWriter - simple event printer
//!
//! A minimal client that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [event-a] field_a1=100 field_a2=false
//! [event-b] field_b1=3.4 field_b2=20
//! ```

use crate::clients::Client;
use crate::error::ClientError;
use crate::events::{Event, EventA, EventB};

/// Event writer client.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders one event as a single line (without trailing newline).
    pub fn format(event: &Event) -> String {
        match event {
            Event::EventA(EventA { field_a1, field_a2 }) => {
                format!("[event-a] field_a1={field_a1} field_a2={field_a2}")
            }
            Event::EventB(EventB { field_b1, field_b2 }) => {
                format!("[event-b] field_b1={field_b1} field_b2={field_b2}")
            }
        }
    }
}

impl Client for LogWriter {
    fn handle_event(&mut self, event: &Event) -> Result<(), ClientError> {
        println!("{}", Self::format(event));
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}
