//! Plan model definition.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ActionCall, AskRequest, Issue, PartialResult, PlanStatus, SafetyInfo};

/// Fixed `kind` discriminator carried by every plan message.
pub const PLAN_KIND: &str = "orchestrated_plan";

/// The root plan message: what an agent should do next, why, and what
/// could go wrong.
///
/// Field order here is the wire order. Optional fields are omitted from
/// the serialized document while unset; they are never emitted as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Plan {
    /// Message type discriminator, always [`PLAN_KIND`]
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Free-form contract version tag
    #[serde(default = "default_version")]
    pub version: String,

    /// Overall outcome of the orchestrated task
    #[serde(default)]
    pub status: PlanStatus,

    /// Human-facing summary; empty rather than absent when unset
    #[serde(default)]
    pub instruction: String,

    /// Actions to perform next; may be empty on error or blocked plans
    #[serde(default)]
    pub next_actions: Vec<ActionCall>,

    /// Question to surface once the actions complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,

    /// Problems that stopped or degraded the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Issue>>,

    /// Non-fatal observations about the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Issue>>,

    /// Names of inputs the task still needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,

    /// Per-step outcomes of a partially completed operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_results: Option<Vec<PartialResult>>,

    /// Structured request for missing information from the consumer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<AskRequest>,

    /// Safe alternatives when blocked or recoverably failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_actions: Option<Vec<ActionCall>>,

    /// Risk metadata for review gating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetyInfo>,

    /// Paths the plan expects to touch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_paths: Option<Vec<String>>,

    /// Tracing identifier supplied by the orchestrator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl Plan {
    /// Creates an empty plan with the given status and version.
    ///
    /// All optional fields start absent; `instruction` starts empty and
    /// `next_actions` starts as an empty sequence.
    pub fn new(status: PlanStatus, version: impl Into<String>) -> Self {
        Self {
            kind: PLAN_KIND.to_string(),
            version: version.into(),
            status,
            instruction: String::new(),
            next_actions: Vec::new(),
            follow_up: None,
            errors: None,
            warnings: None,
            missing: None,
            partial_results: None,
            ask: None,
            recovery_actions: None,
            safety: None,
            affected_paths: None,
            correlation_id: None,
        }
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new(PlanStatus::Ok, "1")
    }
}

fn default_kind() -> String {
    PLAN_KIND.to_string()
}

fn default_version() -> String {
    "1".to_string()
}
