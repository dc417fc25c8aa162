//! Timestamp value type with RFC 3339 parsing and timezone-offset
//! formatting.
//!
//! This crate layers a strict RFC 3339 (HTML5 flavor) parser and a numeric
//! timezone-offset formatter over the chrono ecosystem.
//!
//! # Overview
//!
//! - [`parse_rfc3339`]: validates a date/time string against a strict
//!   lexical pattern and converts it to UNIX epoch seconds. The offset
//!   suffix is matched but deliberately discarded; the date/time fields are
//!   interpreted in the ambient default timezone.
//! - [`format_timezone_offset`]: renders a signed numeric UTC offset as a
//!   zero-padded `+HH:00` / `-HH:00` string.
//! - [`Timestamp`]: the value type. [`Timestamp::new`] opts into RFC 3339
//!   interpretation via [`TimestampKind::Rfc3339`] and otherwise accepts
//!   epoch-seconds strings and naive date/time strings.
//!
//! # Quick Start
//!
//! ```rust
//! use tzstamp::{Timestamp, TimestampKind, format_timezone_offset, parse_rfc3339};
//!
//! // Strict lexical validation; the -08:00 offset is matched, then
//! // discarded. The default timezone is UTC unless configured.
//! let epoch = parse_rfc3339("1996-12-19T16:39:57-08:00").unwrap();
//! assert_eq!(epoch, 851013597);
//!
//! // The same conversion through the constructor, selected by kind.
//! let ts = Timestamp::new("1996-12-19T16:39:57Z", None, Some(TimestampKind::Rfc3339)).unwrap();
//! assert_eq!(ts.unix_timestamp(), 851013597);
//!
//! assert_eq!(format_timezone_offset(-8.0), "-08:00");
//! ```
//!
//! # Modules
//!
//! - [`model`]: the [`Timestamp`] value type and construction kinds
//! - [`util`]: the RFC 3339 parser and the offset formatter
//! - [`error`]: error types

pub mod error;
pub mod model;
pub mod util;

// Re-export commonly used items at crate root
pub use chrono_tz::Tz;
pub use error::TimestampError;
pub use model::{Timestamp, TimestampKind, default_timezone, set_default_timezone};
pub use util::{format_timezone_offset, parse_rfc3339};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
