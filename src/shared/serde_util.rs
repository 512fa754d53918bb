//! Custom serde helpers for exchange wire formats.

/// Maps a Unix-millis integer to and from `DateTime<Utc>`.
///
/// The exchange sends `time` fields as epoch milliseconds, not ISO 8601
/// strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::timestamp_ms")]
        time: DateTime<Utc>,
    }

    #[test]
    fn test_timestamp_ms_round_trip() {
        let parsed: Stamped = serde_json::from_str(r#"{"time":1620000000123}"#).unwrap();
        assert_eq!(parsed.time.timestamp_millis(), 1_620_000_000_123);
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"time":1620000000123}"#);
    }

    #[test]
    fn test_timestamp_ms_rejects_strings() {
        assert!(serde_json::from_str::<Stamped>(r#"{"time":"1620000000123"}"#).is_err());
    }
}
