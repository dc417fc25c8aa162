//! The timestamp value type and its construction paths.

use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use lazy_static::lazy_static;

use crate::error::TimestampError;
use crate::util::datetime::parse_rfc3339;

lazy_static! {
    /// Process-wide default timezone, applied when construction receives no
    /// explicit timezone. Configure once at startup; construction only ever
    /// reads it.
    static ref DEFAULT_TIMEZONE: RwLock<Tz> = RwLock::new(Tz::UTC);
}

/// Sets the ambient default timezone by IANA name.
pub fn set_default_timezone(name: &str) -> Result<(), TimestampError> {
    let tz = resolve_timezone(name)?;
    // A poisoned lock still holds a valid Tz.
    let mut guard = DEFAULT_TIMEZONE.write().unwrap_or_else(|e| e.into_inner());
    *guard = tz;
    Ok(())
}

/// Returns the ambient default timezone.
pub fn default_timezone() -> Tz {
    *DEFAULT_TIMEZONE.read().unwrap_or_else(|e| e.into_inner())
}

fn resolve_timezone(name: &str) -> Result<Tz, TimestampError> {
    Tz::from_str(name).map_err(|_| TimestampError::UnknownTimezone {
        name: name.to_string(),
    })
}

/// Construction kinds beyond the plain date/time string path.
///
/// Callers opt into RFC 3339 interpretation by passing a kind tag to
/// [`Timestamp::new`] instead of pre-parsing the input themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    /// Interpret the input as an RFC 3339 (HTML5 flavor) date/time string.
    Rfc3339,
}

/// Naive date/time shapes accepted by plain construction, tried in order.
/// Unpadded fields are accepted for every numeric component.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// An instant in time, carried in a concrete timezone.
///
/// Thin wrapper over a timezone-aware chrono instant. Comparison, ordering,
/// and hashing follow the instant, so two timestamps in different timezones
/// are equal when they name the same moment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    inner: DateTime<Tz>,
}

impl Timestamp {
    /// Creates a timestamp from a date/time string.
    ///
    /// With `kind` [`TimestampKind::Rfc3339`], `input` is first converted to
    /// UNIX epoch seconds by [`parse_rfc3339`], whose failure is propagated
    /// unchanged. A plain `input` is either an optionally-signed
    /// epoch-seconds string or a naive date/time string
    /// (`YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD` for
    /// midnight).
    ///
    /// `timezone` is an IANA name such as `"America/New_York"`; `None` means
    /// the ambient default. A naive date/time string is interpreted as local
    /// time in that timezone; an epoch string names the same instant in any
    /// timezone.
    pub fn new(
        input: &str,
        timezone: Option<&str>,
        kind: Option<TimestampKind>,
    ) -> Result<Timestamp, TimestampError> {
        match kind {
            Some(TimestampKind::Rfc3339) => {
                let seconds = parse_rfc3339(input)?;
                Timestamp::construct(&seconds.to_string(), timezone)
            }
            None => Timestamp::construct(input, timezone),
        }
    }

    /// Creates a timestamp from UNIX epoch seconds.
    pub fn from_unix(seconds: i64, timezone: Option<&str>) -> Result<Timestamp, TimestampError> {
        let tz = match timezone {
            Some(name) => resolve_timezone(name)?,
            None => default_timezone(),
        };
        match Utc.timestamp_opt(seconds, 0) {
            LocalResult::Single(utc) => Ok(Timestamp {
                inner: utc.with_timezone(&tz),
            }),
            _ => Err(TimestampError::EpochOutOfRange { seconds }),
        }
    }

    /// Base construction path shared by every kind.
    fn construct(input: &str, timezone: Option<&str>) -> Result<Timestamp, TimestampError> {
        if is_epoch_string(input) {
            let seconds = input
                .parse::<i64>()
                .map_err(|_| TimestampError::InvalidDateTime {
                    input: input.to_string(),
                })?;
            return Timestamp::from_unix(seconds, timezone);
        }

        let tz = match timezone {
            Some(name) => resolve_timezone(name)?,
            None => default_timezone(),
        };
        let naive = parse_naive(input).ok_or_else(|| TimestampError::InvalidDateTime {
            input: input.to_string(),
        })?;
        // Earliest instant on a DST fold; a DST gap has no instant at all.
        let resolved =
            tz.from_local_datetime(&naive)
                .earliest()
                .ok_or_else(|| TimestampError::InvalidDateTime {
                    input: input.to_string(),
                })?;
        Ok(Timestamp { inner: resolved })
    }

    /// Returns the instant as UNIX epoch seconds.
    pub fn unix_timestamp(&self) -> i64 {
        self.inner.timestamp()
    }

    /// The timezone this timestamp is carried in.
    pub fn timezone(&self) -> Tz {
        self.inner.timezone()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.to_rfc3339())
    }
}

/// Returns whether the input is an optionally-signed run of digits, i.e. an
/// epoch-seconds string.
fn is_epoch_string(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
