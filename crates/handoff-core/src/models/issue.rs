//! Issue model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A structured error or warning attached to a plan.
///
/// Issues describe problems of the orchestrated task, never failures of
/// the plan machinery itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Issue {
    /// Machine-readable code (e.g. NOT_FOUND, INVALID, PERMISSION)
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Field or path the issue refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Hint for resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Whether the issue can be recovered with more input or alternate
    /// steps; always absent on warnings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recoverable: Option<bool>,
}
