//! Partial result model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::PartialOutcome;

/// The outcome of one step of a multi-step operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PartialResult {
    /// Name of the step
    pub step: String,

    /// What happened to the step
    #[serde(default)]
    pub outcome: PartialOutcome,

    /// Free-form detail about the outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
