//! Core value types.
//!
//! - [`Timestamp`]: an instant carried in a concrete timezone
//! - [`TimestampKind`]: construction kind tags
//! - the ambient default-timezone configuration

pub mod timestamp;

pub use timestamp::{Timestamp, TimestampKind, default_timezone, set_default_timezone};
