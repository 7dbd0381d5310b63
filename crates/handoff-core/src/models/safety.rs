//! Safety info model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Risk metadata attached to a plan for review gating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SafetyInfo {
    /// Whether executing the plan writes code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writes_code: Option<bool>,

    /// Path globs the plan may touch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touches_files: Option<Vec<String>>,
}
