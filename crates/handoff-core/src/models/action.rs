//! Action call model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single named tool invocation recommended by a plan.
///
/// The argument object is free-form; validating its shape is the tool's
/// responsibility, not this crate's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ActionCall {
    /// Name of the external operation to invoke
    pub tool: String,

    /// Free-form arguments for the tool, key order preserved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Map<String, Value>>,

    /// Optional display label for UIs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Whether the caller must confirm before executing; absent means
    /// no opinion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
}
