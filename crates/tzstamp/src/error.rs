//! Error types for timestamp parsing and construction.

use thiserror::Error;

/// Error during timestamp parsing or construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The input failed the RFC 3339 lexical pattern. This is the only
    /// parser-level failure; it carries the rejected string for diagnostics.
    #[error("value could not be validated as an RFC 3339 timestamp: {input:?}")]
    InvalidFormat { input: String },

    /// The timezone name is not in the IANA database.
    #[error("unknown timezone: {name:?}")]
    UnknownTimezone { name: String },

    /// The date/time string could not be resolved to an instant, either
    /// because it matches no accepted shape or because its calendar fields
    /// are out of range.
    #[error("invalid date/time: {input:?}")]
    InvalidDateTime { input: String },

    /// Epoch seconds outside the representable range.
    #[error("epoch seconds out of range: {seconds}")]
    EpochOutOfRange { seconds: i64 },
}
