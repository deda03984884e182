use std::fmt;

/// Errors from the crate's serialization boundary.
///
/// The scoring transition itself is total and never fails; errors can only
/// arise when match state crosses the JSON API.
#[derive(Debug)]
pub enum MatchError {
    SchemaVersionMismatch { expected: u8, found: u8 },
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::SchemaVersionMismatch { expected, found } => {
                write!(f, "Schema version mismatch: expected {}, found {}", expected, found)
            }
            MatchError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            MatchError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::DeserializationError(err.to_string())
        } else {
            MatchError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
