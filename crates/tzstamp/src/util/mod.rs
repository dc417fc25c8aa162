//! Utility modules.

pub mod datetime;

pub use datetime::{format_timezone_offset, parse_rfc3339};
