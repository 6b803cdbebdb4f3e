//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Timestamp {
        serde_json::from_value(serde_json::Value::String(raw.to_string())).unwrap()
    }

    #[test]
    fn timestamps_order_chronologically() {
        let earlier = parse("2024-01-01T00:00:00Z");
        let later = parse("2024-06-01T00:00:00Z");
        assert!(earlier < later);
        assert!(Timestamp::now() > later);
    }

    #[test]
    fn timestamp_serializes_transparently() {
        let ts = parse("2024-03-05T12:00:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-03-05T12:00:00Z\"");
        assert_eq!(ts.to_string(), "2024-03-05T12:00:00+00:00");
    }
}
