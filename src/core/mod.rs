//! Dispatch core.
//!
//! The public API from this module is [`Driver`], which builds events and
//! fans them out to registered clients, plus its [`Config`].
//!
//! Internal modules:
//! - [`driver`]: the in-order fan-out loop and failure policy;
//! - [`builder`]: assembles a driver from config and clients;
//! - [`config`]: driver settings.

mod builder;
mod config;
mod driver;

pub use builder::DriverBuilder;
pub use config::{Config, FailurePolicy};
pub use driver::Driver;
