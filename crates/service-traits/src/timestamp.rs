//! Second-resolution instant, exchanged as a Unix epoch.

use {
    chrono::{DateTime, SecondsFormat, SubsecRound, Utc},
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    serde_json::Value,
    vidgraph_patch::{CustomScalar, DecodeError},
};

/// `0000-01-01T00:00:00Z`.
const MIN_EPOCH: i64 = -62_167_219_200;
/// `9999-12-31T23:59:59Z`.
const MAX_EPOCH: i64 = 253_402_300_799;

/// Whole seconds, UTC, within the four-digit years RFC 3339 can express.
///
/// Decodes from an RFC 3339 string or an integer epoch. Serializes as the
/// integer epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// `None` outside years 0000 to 9999.
    #[must_use]
    pub fn from_epoch_seconds(seconds: i64) -> Option<Self> {
        if !(MIN_EPOCH..=MAX_EPOCH).contains(&seconds) {
            return None;
        }
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    #[must_use]
    pub fn epoch_seconds(self) -> i64 {
        self.0.timestamp()
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(0))
    }

    /// RFC 3339 rendering, e.g. `2024-01-01T00:00:00Z`.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl CustomScalar for Timestamp {
    const NAME: &'static str = "Timestamp";

    fn decode(raw: &Value) -> Result<Self, DecodeError> {
        match raw {
            Value::String(s) => {
                let parsed = DateTime::parse_from_rfc3339(s).map_err(|e| {
                    DecodeError::invalid(format!("`{s}` is not an RFC 3339 timestamp: {e}"))
                })?;
                Self::from_epoch_seconds(parsed.timestamp())
                    .ok_or_else(|| DecodeError::invalid(format!("`{s}` is outside years 0000-9999")))
            },
            Value::Number(n) => {
                let seconds = n
                    .as_i64()
                    .ok_or_else(|| DecodeError::invalid(format!("{n} is not a whole epoch second")))?;
                Self::from_epoch_seconds(seconds).ok_or_else(|| {
                    DecodeError::invalid(format!("epoch {seconds} is outside years 0000-9999"))
                })
            },
            other => Err(DecodeError::unexpected(other)),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.epoch_seconds())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(&raw).map_err(serde::de::Error::custom)
    }
}
