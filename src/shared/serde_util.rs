//! Custom serde helpers for ledger wire formats and config files.

/// Deserializes an optional Unix-microseconds value into `DateTime<Utc>`.
///
/// The ledger REST API sends `timestamp` as a decimal string of microseconds
/// (`"1700000000123456"`), not as an ISO 8601 string.
pub mod timestamp_us_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let micros: i64 = raw
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {}", raw)))?;
        DateTime::<Utc>::from_timestamp_micros(micros)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", micros)))
    }
}

/// (De)serializes a `Duration` as whole milliseconds.
pub mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

/// Deserializes a `u64` sent as a decimal string (the ledger's JSON convention).
pub mod u64_string_opt {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| {
            s.parse::<u64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid u64: {}", s)))
        })
        .transpose()
    }
}
