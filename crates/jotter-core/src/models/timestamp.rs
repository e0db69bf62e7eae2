//! Second-resolution timestamps with a fixed wire format

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Wire format shared by the local and remote stores, e.g. `2024-03-01 09:15:00 PM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// A note timestamp.
///
/// Ordering compares instants, not the formatted strings, so `01:00 PM`
/// sorts after `11:00 AM` of the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Current UTC time truncated to whole seconds
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now().naive_utc())
    }

    /// Build a timestamp from Unix seconds
    pub fn from_unix_seconds(seconds: i64) -> Result<Self> {
        DateTime::from_timestamp(seconds, 0)
            .map(|datetime| Self(datetime.naive_utc()))
            .ok_or_else(|| Error::InvalidInput(format!("timestamp out of range: {seconds}")))
    }

    /// Unix seconds, the representation used by the `SQLite` store
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.and_utc().timestamp()
    }

    /// Parse the fixed wire format
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|error| Error::InvalidInput(format!("invalid timestamp '{value}': {error}")))
    }

    fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_twelve_hour_clock() {
        let ts = Timestamp::parse("2024-03-01 09:15:00 PM").unwrap();
        assert_eq!(ts.to_string(), "2024-03-01 09:15:00 PM");
    }

    #[test]
    fn orders_by_instant_not_text() {
        let morning = Timestamp::parse("2024-03-01 11:00:00 AM").unwrap();
        let afternoon = Timestamp::parse("2024-03-01 01:00:00 PM").unwrap();
        assert!(afternoon > morning);
        assert!(afternoon.to_string() < morning.to_string());
    }

    #[test]
    fn unix_seconds_roundtrip() {
        let now = Timestamp::now();
        let restored = Timestamp::from_unix_seconds(now.unix_seconds()).unwrap();
        assert_eq!(now, restored);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_err());
    }

    #[test]
    fn serde_uses_wire_format() {
        let ts = Timestamp::parse("2023-12-31 12:00:00 AM").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2023-12-31 12:00:00 AM\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
