//! Token enumerations for plans, ask fields, and partial results.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Overall outcome of a plan message.
///
/// The status describes the orchestrated task, not the builder: a plan
/// carrying `Error` is itself a perfectly well-formed message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// The task can proceed as instructed
    #[default]
    Ok,

    /// The task failed outright
    Error,

    /// The request was understood but its inputs were invalid
    Invalid,

    /// The task is blocked, typically on permissions
    Blocked,

    /// Some steps succeeded, some did not
    Partial,
}

impl PlanStatus {
    /// Wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Ok => "ok",
            PlanStatus::Error => "error",
            PlanStatus::Invalid => "invalid",
            PlanStatus::Blocked => "blocked",
            PlanStatus::Partial => "partial",
        }
    }
}

impl FromStr for PlanStatus {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(PlanStatus::Ok),
            "error" => Ok(PlanStatus::Error),
            "invalid" => Ok(PlanStatus::Invalid),
            "blocked" => Ok(PlanStatus::Blocked),
            "partial" => Ok(PlanStatus::Partial),
            _ => Err(PlanError::unknown_token("plan status", s)),
        }
    }
}

/// Input type of a field requested through an ask prompt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum AskFieldType {
    /// Free-form text
    #[default]
    String,

    /// Numeric input
    Number,

    /// One of a fixed option list
    Select,
}

impl AskFieldType {
    /// Wire token for this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AskFieldType::String => "string",
            AskFieldType::Number => "number",
            AskFieldType::Select => "select",
        }
    }
}

impl FromStr for AskFieldType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(AskFieldType::String),
            "number" => Ok(AskFieldType::Number),
            "select" => Ok(AskFieldType::Select),
            _ => Err(PlanError::unknown_token("ask field type", s)),
        }
    }
}

/// Outcome of a single step of a multi-step operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PartialOutcome {
    /// The step completed
    #[default]
    Ok,

    /// The step was skipped
    Skipped,

    /// The step failed
    Failed,
}

impl PartialOutcome {
    /// Wire token for this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartialOutcome::Ok => "ok",
            PartialOutcome::Skipped => "skipped",
            PartialOutcome::Failed => "failed",
        }
    }
}

impl FromStr for PartialOutcome {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(PartialOutcome::Ok),
            "skipped" => Ok(PartialOutcome::Skipped),
            "failed" => Ok(PartialOutcome::Failed),
            _ => Err(PlanError::unknown_token("partial outcome", s)),
        }
    }
}
