//! Error types for the plan message library.

use thiserror::Error;

/// Error type for plan serialization and token parsing.
///
/// The builder itself is infallible; only converting a finished plan to
/// JSON and parsing wire tokens back into enums can fail.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A wire token did not match any value of the target enumeration
    #[error("Unknown {what} token: '{value}'")]
    UnknownToken { what: &'static str, value: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl PlanError {
    /// Creates an unknown-token error for the named enumeration.
    pub fn unknown_token(what: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownToken {
            what,
            value: value.into(),
        }
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;
