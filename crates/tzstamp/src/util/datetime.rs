//! RFC 3339 date/time parsing and timezone-offset formatting.
//!
//! The parser validates the HTML5 flavor of RFC 3339 (uppercase `T` and `Z`,
//! optional whitespace before the `T`) against a strict lexical pattern, then
//! converts the matched fields to UNIX epoch seconds through [`Timestamp`].
//! The offset suffix is matched but not applied: the date/time fields are
//! interpreted as a naive local time in the ambient default timezone.

use crate::error::TimestampError;
use crate::model::Timestamp;

/// Date/time fields extracted by the lexical matcher.
///
/// Digit-shape checked only; calendar validity is the constructor's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawDateTime {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// Reads `len` digits at `*pos`, the first constrained to `[lo, hi]`.
fn read_number(bytes: &[u8], pos: &mut usize, len: usize, lo: u8, hi: u8) -> Option<u32> {
    if *pos + len > bytes.len() {
        return None;
    }
    if bytes[*pos] < lo || bytes[*pos] > hi {
        return None;
    }

    let mut value = 0u32;
    for &b in &bytes[*pos..*pos + len] {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    *pos += len;
    Some(value)
}

/// Consumes one expected byte at `*pos`.
fn expect(bytes: &[u8], pos: &mut usize, expected: u8) -> Option<()> {
    if bytes.get(*pos) == Some(&expected) {
        *pos += 1;
        Some(())
    } else {
        None
    }
}

/// Matches the full RFC 3339 pattern, anchored at both ends.
///
/// Pattern: `YYYY-MM-DD[ws]THH:MM:SS[.digits](Z|±HH:00)?`. Each numeric
/// field is constrained by its leading digit (year 1000-2999, month `0x`/`1x`,
/// day `0x`-`3x`, hour `0x`-`2x`, minute and second `0x`-`5x`), and an offset
/// must carry the literal `:00` minutes. Fractional seconds and the offset
/// are matched for shape and discarded.
fn match_rfc3339(input: &str) -> Option<RawDateTime> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    let year = read_number(bytes, &mut pos, 4, b'1', b'2')?;
    expect(bytes, &mut pos, b'-')?;
    let month = read_number(bytes, &mut pos, 2, b'0', b'1')?;
    expect(bytes, &mut pos, b'-')?;
    let day = read_number(bytes, &mut pos, 2, b'0', b'3')?;

    // HTML5 looseness: a whitespace run may separate the date from the 'T'.
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    expect(bytes, &mut pos, b'T')?;
    let hour = read_number(bytes, &mut pos, 2, b'0', b'2')?;
    expect(bytes, &mut pos, b':')?;
    let minute = read_number(bytes, &mut pos, 2, b'0', b'5')?;
    expect(bytes, &mut pos, b':')?;
    let second = read_number(bytes, &mut pos, 2, b'0', b'5')?;

    // Fractional seconds: '.' followed by at least one digit.
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == start {
            return None;
        }
    }

    // Offset suffix: 'Z', or a sign and a whole-hour offset.
    if pos < bytes.len() {
        match bytes[pos] {
            b'Z' => pos += 1,
            b'+' | b'-' => {
                pos += 1;
                read_number(bytes, &mut pos, 2, b'0', b'1')?;
                expect(bytes, &mut pos, b':')?;
                expect(bytes, &mut pos, b'0')?;
                expect(bytes, &mut pos, b'0')?;
            }
            _ => return None,
        }
    }

    if pos != bytes.len() {
        return None;
    }

    Some(RawDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

/// Converts an RFC 3339 (HTML5 flavor) date/time string to UNIX epoch
/// seconds.
///
/// The offset suffix is discarded: the date/time fields are interpreted as a
/// naive local time in the ambient default timezone. Only digit shapes are
/// validated here; shape-valid but calendar-invalid fields (month 13) fail
/// in [`Timestamp`] construction instead.
///
/// # Errors
///
/// [`TimestampError::InvalidFormat`] when the input fails the lexical
/// pattern; construction errors are propagated unchanged.
pub fn parse_rfc3339(input: &str) -> Result<i64, TimestampError> {
    let raw = match_rfc3339(input).ok_or_else(|| TimestampError::InvalidFormat {
        input: input.to_string(),
    })?;

    // Unpadded on purpose: the constructor tolerates single-digit fields.
    let datetime = format!(
        "{}-{}-{} {}:{}:{}",
        raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second
    );
    let timestamp = Timestamp::new(&datetime, None, None)?;
    Ok(timestamp.unix_timestamp())
}

/// Formats a numeric UTC offset as a `±HH:00` string: `8` yields `"+08:00"`,
/// `-12` yields `"-12:00"`.
///
/// Total over its domain: values outside ±24 are formatted without
/// complaint, and a non-integer magnitude below ten keeps its fractional
/// digits between the pad and the colon (`-8.5` yields `"-08.5:00"`).
pub fn format_timezone_offset(value: f64) -> String {
    if value < 0.0 {
        if value.abs() >= 10.0 {
            format!("{}:00", value)
        } else {
            format!("-0{}:00", value.abs())
        }
    } else if value >= 10.0 {
        format!("+{}:00", value)
    } else {
        format!("+0{}:00", value)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_format_offset_whole_hours() {
        assert_eq!(format_timezone_offset(8.0), "+08:00");
        assert_eq!(format_timezone_offset(-8.0), "-08:00");
        assert_eq!(format_timezone_offset(12.0), "+12:00");
        assert_eq!(format_timezone_offset(-12.0), "-12:00");
        assert_eq!(format_timezone_offset(0.0), "+00:00");
    }

    #[test]
    fn test_format_offset_fractional() {
        // Textual concatenation: the fraction sits between pad and colon.
        assert_eq!(format_timezone_offset(-8.5), "-08.5:00");
        assert_eq!(format_timezone_offset(5.75), "+05.75:00");
        assert_eq!(format_timezone_offset(10.5), "+10.5:00");
    }

    #[test]
    fn test_format_offset_no_range_validation() {
        assert_eq!(format_timezone_offset(99.0), "+99:00");
        assert_eq!(format_timezone_offset(-99.0), "-99:00");
    }

    proptest! {
        #[test]
        fn single_digit_offsets_are_zero_padded(v in prop_oneof![-9i32..=-1, 1i32..=9]) {
            let s = format_timezone_offset(v as f64);
            let bytes = s.as_bytes();
            prop_assert_eq!(bytes.len(), 6);
            prop_assert!(bytes[0] == b'+' || bytes[0] == b'-');
            prop_assert_eq!(bytes[1], b'0');
            prop_assert!(bytes[2].is_ascii_digit());
            prop_assert_eq!(&s[3..], ":00");
        }

        #[test]
        fn double_digit_offsets_omit_the_pad(v in prop_oneof![-24i32..=-10, 10i32..=24]) {
            let s = format_timezone_offset(v as f64);
            prop_assert_eq!(s.len(), 6);
            prop_assert!(s.starts_with('+') || s.starts_with('-'));
            prop_assert_ne!(s.as_bytes()[1], b'0');
            prop_assert!(s.ends_with(":00"));
        }
    }

    #[test]
    fn test_parse_rfc3339_epoch_values() {
        // Unit tests run with the initial UTC default timezone.
        assert_eq!(parse_rfc3339("1970-01-01T00:00:00Z").unwrap(), 0);
        assert_eq!(parse_rfc3339("1996-12-19T16:39:57Z").unwrap(), 851_013_597);
    }

    #[test]
    fn test_parse_rfc3339_offset_is_discarded() {
        let naive = Timestamp::new("1996-12-19 16:39:57", None, None).unwrap();
        assert_eq!(
            parse_rfc3339("1996-12-19T16:39:57-08:00").unwrap(),
            naive.unix_timestamp()
        );
        assert_eq!(
            parse_rfc3339("1996-12-19T16:39:57+05:00").unwrap(),
            naive.unix_timestamp()
        );
        assert_eq!(
            parse_rfc3339("1996-12-19T16:39:57Z").unwrap(),
            naive.unix_timestamp()
        );
    }

    #[test]
    fn test_parse_rfc3339_whitespace_before_t() {
        let strict = parse_rfc3339("1996-12-19T16:39:57Z").unwrap();
        assert_eq!(parse_rfc3339("1996-12-19 T16:39:57Z").unwrap(), strict);
        assert_eq!(parse_rfc3339("1996-12-19 \t T16:39:57Z").unwrap(), strict);
        // Whitespace after the 'T' is not tolerated.
        assert!(parse_rfc3339("1996-12-19T 16:39:57Z").is_err());
    }

    #[test]
    fn test_parse_rfc3339_fraction_is_truncated() {
        let whole = parse_rfc3339("1996-12-19T16:39:57Z").unwrap();
        assert_eq!(parse_rfc3339("1996-12-19T16:39:57.999Z").unwrap(), whole);
        assert_eq!(parse_rfc3339("1996-12-19T16:39:57.0001").unwrap(), whole);
        // A bare '.' with no digits fails the match.
        assert!(matches!(
            parse_rfc3339("1996-12-19T16:39:57.Z"),
            Err(TimestampError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rfc3339_rejects_partial_hour_offsets() {
        assert!(matches!(
            parse_rfc3339("1996-12-19T16:39:57-08:30"),
            Err(TimestampError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_rfc3339("1996-12-19T16:39:57+05:45"),
            Err(TimestampError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rfc3339_rejects_malformed_input() {
        let inputs = [
            "",
            "not-a-date",
            "1996-12-19",
            "1996-12-19T16:39",
            "96-12-19T16:39:57Z",
            "3001-01-01T00:00:00Z",
            "1996-12-19t16:39:57Z",
            "1996-12-19T16:39:57z",
            "1996-12-19T16:39:57+0800",
            "1996-12-19T16:39:57Z extra",
            "1990-12-31T23:59:60Z",
        ];
        for input in inputs {
            assert_eq!(
                parse_rfc3339(input).unwrap_err(),
                TimestampError::InvalidFormat {
                    input: input.to_string()
                },
                "expected lexical rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rfc3339_delegates_calendar_validity() {
        // Month 13 and day 39 satisfy the digit shapes; the constructor
        // rejects them, not the lexical match.
        assert!(matches!(
            parse_rfc3339("1996-13-39T16:39:57Z"),
            Err(TimestampError::InvalidDateTime { .. })
        ));
        assert!(matches!(
            parse_rfc3339("1996-12-19T29:39:57Z"),
            Err(TimestampError::InvalidDateTime { .. })
        ));
        // Day 40 already fails the shape (leading digit outside 0-3).
        assert!(matches!(
            parse_rfc3339("1996-13-40T16:39:57Z"),
            Err(TimestampError::InvalidFormat { .. })
        ));
    }
}
