//! # Error
//!
//! Every way building an embedded metrics payload can fail

use thiserror::Error;

/// Which AWS character-set or length rule a string broke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Empty,
    TooLong { len: usize, max: usize },
    NonAscii,
    Blank,
    LeadingColon,
    ControlCharacter,
    DisallowedCharacter(char),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Empty => f.write_str("must not be empty"),
            Violation::TooLong { len, max } => write!(f, "length {len} exceeds maximum of {max}"),
            Violation::NonAscii => f.write_str("must contain only ASCII characters"),
            Violation::Blank => f.write_str("must contain a non-whitespace character"),
            Violation::LeadingColon => f.write_str("must not start with ':'"),
            Violation::ControlCharacter => f.write_str("must not contain control characters"),
            Violation::DisallowedCharacter(c) => write!(f, "character {c:?} is not allowed"),
        }
    }
}

/// Payload construction errors
///
/// Messages never include dimension values, only key and metric names.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid dimension key: {0}")]
    InvalidDimensionKey(Violation),

    #[error("invalid dimension value: {0}")]
    InvalidDimensionValue(Violation),

    #[error("invalid namespace: {0}")]
    InvalidNamespace(Violation),

    #[error("metric {name} has a non-finite value")]
    InvalidMetricValue { name: String },

    #[error("key collision: {}", keys.join(", "))]
    KeyCollision { keys: Vec<String> },

    #[error("cannot build a payload from an empty metric collection")]
    EmptyCollection,

    #[error("{count} dimensions exceeds the maximum of {max}")]
    TooManyDimensions { count: usize, max: usize },

    #[error("{count} metrics exceeds the maximum of {max}")]
    TooManyMetrics { count: usize, max: usize },

    #[error("_aws metadata does not describe the payload's {0}")]
    InconsistentMetadata(&'static str),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cloudwatch_namespace missing")]
    MissingNamespace,
}

impl Error {
    /// Static identifier for the error, safe to log without leaking payload content
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidDimensionKey(_) => "invalid_dimension_key",
            Error::InvalidDimensionValue(_) => "invalid_dimension_value",
            Error::InvalidNamespace(_) => "invalid_namespace",
            Error::InvalidMetricValue { .. } => "invalid_metric_value",
            Error::KeyCollision { .. } => "key_collision",
            Error::EmptyCollection => "empty_collection",
            Error::TooManyDimensions { .. } => "too_many_dimensions",
            Error::TooManyMetrics { .. } => "too_many_metrics",
            Error::InconsistentMetadata(_) => "inconsistent_metadata",
            Error::Serialization(_) => "serialization",
            Error::MissingNamespace => "missing_namespace",
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_collision_lists_every_key() {
        let err = Error::KeyCollision {
            keys: vec!["Endpoint".into(), "_aws".into()],
        };
        assert_eq!(err.to_string(), "key collision: Endpoint, _aws");
        assert_eq!(err.kind(), "key_collision");
    }

    #[test]
    fn violation_messages() {
        let err = Error::InvalidDimensionKey(Violation::TooLong { len: 256, max: 255 });
        assert_eq!(err.to_string(), "invalid dimension key: length 256 exceeds maximum of 255");

        let err = Error::InvalidNamespace(Violation::DisallowedCharacter(' '));
        assert_eq!(err.to_string(), "invalid namespace: character ' ' is not allowed");
    }
}
