//! # Timestamp Value Object
//!
//! Execution timestamp without timezone.
//!
//! This module provides the [`Timestamp`] type wrapping a naive date-time.
//! Trade records carry local execution times with no offset; comparisons
//! are plain chronological ordering.
//!
//! The wire form is ISO 8601 without offset, `2023-05-01T10:30:00`.
//! Parsing additionally accepts a fractional-second suffix and a
//! seconds-less form (`2023-05-01T10:30`).

use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accepted input formats, tried in order.
const PARSE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Display/serialization format.
const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A timezone-less execution timestamp.
///
/// # Examples
///
/// ```
/// use trade_query::domain::value_objects::timestamp::Timestamp;
///
/// let ts = Timestamp::parse("2023-05-01T10:30").unwrap();
/// assert_eq!(ts.to_string(), "2023-05-01T10:30:00");
///
/// let later = Timestamp::parse("2023-05-02T09:45:00").unwrap();
/// assert!(ts < later);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp from an existing naive date-time.
    #[inline]
    #[must_use]
    pub const fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Parses a timestamp from an ISO 8601 string without offset.
    ///
    /// Accepts `%Y-%m-%dT%H:%M:%S%.f`, `%Y-%m-%dT%H:%M:%S` and the
    /// seconds-less `%Y-%m-%dT%H:%M`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if no format matches.
    pub fn parse(s: &str) -> DomainResult<Self> {
        PARSE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTimestamp(s.to_string()))
    }

    /// Returns the inner naive date-time.
    #[inline]
    #[must_use]
    pub const fn get(self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl From<NaiveDateTime> for Timestamp {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn parses_full_seconds_form() {
            let ts = Timestamp::parse("2023-05-01T10:30:00").unwrap();
            assert_eq!(ts.to_string(), "2023-05-01T10:30:00");
        }

        #[test]
        fn parses_seconds_less_form() {
            let ts = Timestamp::parse("2023-05-01T10:30").unwrap();
            assert_eq!(ts.to_string(), "2023-05-01T10:30:00");
        }

        #[test]
        fn parses_fractional_seconds() {
            let ts = Timestamp::parse("2023-05-01T10:30:00.123").unwrap();
            assert_eq!(ts.get().and_utc().timestamp_subsec_millis(), 123);
        }

        #[test]
        fn rejects_date_only() {
            assert!(matches!(
                Timestamp::parse("2023-05-01"),
                Err(DomainError::InvalidTimestamp(_))
            ));
        }

        #[test]
        fn rejects_garbage() {
            assert!(Timestamp::parse("not-a-timestamp").is_err());
        }

        #[test]
        fn from_str_matches_parse() {
            let parsed: Timestamp = "2023-05-02T09:45".parse().unwrap();
            assert_eq!(parsed, Timestamp::parse("2023-05-02T09:45:00").unwrap());
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn chronological_ordering() {
            let earlier = Timestamp::parse("2023-05-01T10:30").unwrap();
            let later = Timestamp::parse("2023-05-02T09:45").unwrap();
            assert!(earlier < later);
            assert!(later >= earlier);
        }

        #[test]
        fn equal_instants_compare_equal() {
            let a = Timestamp::parse("2023-05-01T10:30").unwrap();
            let b = Timestamp::parse("2023-05-01T10:30:00").unwrap();
            assert_eq!(a, b);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serializes_as_iso_string() {
            let ts = Timestamp::parse("2023-05-01T10:30").unwrap();
            let json = serde_json::to_string(&ts).unwrap();
            assert_eq!(json, "\"2023-05-01T10:30:00\"");
        }

        #[test]
        fn roundtrip() {
            let ts = Timestamp::parse("2023-05-02T09:45:00").unwrap();
            let json = serde_json::to_string(&ts).unwrap();
            let back: Timestamp = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ts);
        }

        #[test]
        fn deserialize_invalid_fails() {
            let result: Result<Timestamp, _> = serde_json::from_str("\"2023/05/01\"");
            assert!(result.is_err());
        }
    }
}
