//! Ask prompt model definitions.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AskFieldType;

/// A structured request for missing information from the plan's consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AskRequest {
    /// Text shown to whoever supplies the answers
    pub prompt: String,

    /// Fields to collect; always serialized, possibly empty
    #[serde(default)]
    pub fields: Vec<AskField>,
}

/// One typed field within an [`AskRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AskField {
    /// Field name used to key the answer
    pub name: String,

    /// Input type expected for the answer
    #[serde(rename = "type", default)]
    pub field_type: AskFieldType,

    /// Whether an answer is mandatory; absent means no opinion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Fixed answer choices, chiefly for `select` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}
