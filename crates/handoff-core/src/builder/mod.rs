//! Fluent builder for assembling plan messages.

use serde_json::Value;

use crate::{
    error::Result,
    models::{
        ActionCall, AskField, AskFieldType, AskRequest, Issue, PartialOutcome, PartialResult,
        Plan, PlanStatus, SafetyInfo,
    },
    payload,
};


/// Prompt used when ask fields arrive before any prompt was set.
const DEFAULT_ASK_PROMPT: &str = "Please provide:";

/// Default message for permission-blocked plans.
const PERMISSION_MESSAGE: &str = "Insufficient permissions.";

/// Incrementally assembles a [`Plan`] through chained mutators.
///
/// Every mutator consumes the builder and returns it, so a plan under
/// construction has exactly one owner at a time; concurrent
/// constructions need independent builders. Defaulting and input
/// normalization happen at mutation time, and no mutator can fail.
///
/// No validation runs at [`build`](Self::build): a plan whose status
/// disagrees with its diagnostics is permitted, and keeping the overall
/// status consistent with the issues added is the caller's contract.
///
/// # Examples
///
/// ```rust
/// use handoff_core::{PlanBuilder, PlanStatus};
/// use serde_json::json;
///
/// let plan = PlanBuilder::new()
///     .with_instruction("Scaffold Payroll screen and components.")
///     .add_next_action(
///         "create_screen",
///         Some(json!({"screen": "Payroll"})),
///         None,
///         None,
///     )
///     .with_follow_up("Wire the new components to the API now?")
///     .build();
///
/// assert_eq!(plan.status, PlanStatus::Ok);
/// assert_eq!(plan.next_actions.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    plan: Plan,
}

impl PlanBuilder {
    /// Creates a builder for an empty `ok` plan, contract version `"1"`.
    pub fn new() -> Self {
        Self {
            plan: Plan::new(PlanStatus::Ok, "1"),
        }
    }

    /// Replaces the plan status.
    pub fn with_status(mut self, status: PlanStatus) -> Self {
        self.plan.status = status;
        self
    }

    /// Replaces the contract version tag.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.plan.version = version.into();
        self
    }

    /// Replaces the human-facing instruction summary.
    ///
    /// The instruction is always present on the wire; it is empty, not
    /// absent, until this is called.
    pub fn with_instruction(mut self, text: impl Into<String>) -> Self {
        self.plan.instruction = text.into();
        self
    }

    /// Sets the follow-up question; whitespace-only input clears it.
    pub fn with_follow_up(mut self, text: impl Into<String>) -> Self {
        self.plan.follow_up = non_blank(text);
        self
    }

    /// Sets the tracing correlation id; whitespace-only input clears it.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.plan.correlation_id = non_blank(id);
        self
    }

    /// Merges safety metadata into the plan.
    ///
    /// Safety info is created on first call. Later calls overwrite only
    /// the sub-fields they supply; a supplied `touches_files` replaces
    /// the previous list wholesale rather than appending.
    pub fn with_safety(
        mut self,
        writes_code: Option<bool>,
        touches_files: Option<Vec<String>>,
    ) -> Self {
        let safety = self.plan.safety.get_or_insert_with(SafetyInfo::default);
        if let Some(writes) = writes_code {
            safety.writes_code = Some(writes);
        }
        if let Some(files) = touches_files {
            safety.touches_files = Some(files);
        }
        self
    }

    /// Appends paths the plan expects to touch, dropping blank entries.
    pub fn add_affected_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.plan.affected_paths.get_or_insert_with(Vec::new);
        list.extend(paths.into_iter().map(Into::into).filter(|p| !p.trim().is_empty()));
        self
    }

    /// Appends an action to perform next.
    ///
    /// `args` passes through [`crate::args::normalize`]: `null` becomes
    /// absent, an object is kept verbatim, anything else becomes the
    /// empty object.
    pub fn add_next_action(
        mut self,
        tool: impl Into<String>,
        args: Option<Value>,
        label: Option<&str>,
        confirm: Option<bool>,
    ) -> Self {
        self.plan
            .next_actions
            .push(action_call(tool, args, label, confirm));
        self
    }

    /// Appends a safe alternative action for blocked or recoverably
    /// failed plans.
    pub fn add_recovery_action(
        mut self,
        tool: impl Into<String>,
        args: Option<Value>,
        label: Option<&str>,
        confirm: Option<bool>,
    ) -> Self {
        self.plan
            .recovery_actions
            .get_or_insert_with(Vec::new)
            .push(action_call(tool, args, label, confirm));
        self
    }

    /// Replaces the ask prompt wholesale.
    pub fn with_ask(mut self, prompt: impl Into<String>, fields: Option<Vec<AskField>>) -> Self {
        self.plan.ask = Some(AskRequest {
            prompt: prompt.into(),
            fields: fields.unwrap_or_default(),
        });
        self
    }

    /// Appends a field to the ask prompt, creating one with a default
    /// prompt text if none exists yet.
    pub fn add_ask_field(
        mut self,
        name: impl Into<String>,
        field_type: AskFieldType,
        required: bool,
        options: Option<Vec<String>>,
    ) -> Self {
        let ask = self.plan.ask.get_or_insert_with(|| AskRequest {
            prompt: DEFAULT_ASK_PROMPT.to_string(),
            fields: Vec::new(),
        });
        ask.fields.push(AskField {
            name: name.into(),
            field_type,
            required: Some(required),
            options,
        });
        self
    }

    /// Appends an error issue.
    pub fn add_error(
        mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        field: Option<&str>,
        hint: Option<&str>,
        recoverable: Option<bool>,
    ) -> Self {
        self.plan.errors.get_or_insert_with(Vec::new).push(Issue {
            code: code.into(),
            message: message.into(),
            field: field.map(str::to_string),
            hint: hint.map(str::to_string),
            recoverable,
        });
        self
    }

    /// Appends a warning issue; warnings never carry `recoverable`.
    pub fn add_warning(
        mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        field: Option<&str>,
        hint: Option<&str>,
    ) -> Self {
        self.plan.warnings.get_or_insert_with(Vec::new).push(Issue {
            code: code.into(),
            message: message.into(),
            field: field.map(str::to_string),
            hint: hint.map(str::to_string),
            recoverable: None,
        });
        self
    }

    /// Appends names of still-needed inputs, dropping blank names.
    pub fn add_missing<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.plan.missing.get_or_insert_with(Vec::new);
        list.extend(names.into_iter().map(Into::into).filter(|n| !n.trim().is_empty()));
        self
    }

    /// Appends the outcome of one step of a multi-step operation.
    pub fn add_partial_result(
        mut self,
        step: impl Into<String>,
        outcome: PartialOutcome,
        detail: Option<&str>,
    ) -> Self {
        self.plan
            .partial_results
            .get_or_insert_with(Vec::new)
            .push(PartialResult {
                step: step.into(),
                outcome,
                detail: detail.map(str::to_string),
            });
        self
    }

    /// Shortcut: records a recoverable `NOT_FOUND` error for `field`.
    pub fn not_found(self, field: &str, value: &str, hint: Option<&str>) -> Self {
        self.add_error(
            "NOT_FOUND",
            format!("No match for '{value}'."),
            Some(field),
            hint,
            Some(true),
        )
    }

    /// Shortcut: records a recoverable `INVALID` error for `field`.
    pub fn invalid(self, field: &str, message: impl Into<String>, hint: Option<&str>) -> Self {
        self.add_error("INVALID", message, Some(field), hint, Some(true))
    }

    /// Shortcut: records a non-recoverable `PERMISSION` error and forces
    /// the plan status to [`PlanStatus::Blocked`].
    ///
    /// `message` defaults to `"Insufficient permissions."` when omitted.
    /// This is the only shortcut that touches the status; all others
    /// leave it for the caller to keep consistent.
    pub fn permission_blocked(self, message: Option<&str>, hint: Option<&str>) -> Self {
        let message = message.unwrap_or(PERMISSION_MESSAGE);
        let mut builder = self.add_error("PERMISSION", message, None, hint, Some(false));
        builder.plan.status = PlanStatus::Blocked;
        builder
    }

    /// Applies a batch of mutations inline and returns the builder.
    ///
    /// A composition convenience only; `apply` receives the owned
    /// builder and must hand it back.
    pub fn with(self, apply: impl FnOnce(Self) -> Self) -> Self {
        apply(self)
    }

    /// Finishes assembly and hands the plan to the caller.
    pub fn build(self) -> Plan {
        self.plan
    }

    /// Serializes the current plan to a JSON string without consuming
    /// or mutating the builder.
    ///
    /// Uses the same wire policy as [`crate::payload::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanError::Serialization`] if JSON encoding fails.
    pub fn build_json(&self, indented: bool) -> Result<String> {
        payload::to_json(&self.plan, indented)
    }

    /// Serializes the current plan to an in-memory JSON value without
    /// consuming or mutating the builder.
    ///
    /// Uses the same wire policy as [`crate::payload::to_value`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlanError::Serialization`] if JSON encoding fails.
    pub fn build_payload(&self) -> Result<Value> {
        payload::to_value(&self.plan)
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructs an action call with normalized arguments.
fn action_call(
    tool: impl Into<String>,
    args: Option<Value>,
    label: Option<&str>,
    confirm: Option<bool>,
) -> ActionCall {
    ActionCall {
        tool: tool.into(),
        args: crate::args::normalize(args),
        label: label.map(str::to_string),
        confirm,
    }
}

/// Maps whitespace-only input to `None`.
fn non_blank(text: impl Into<String>) -> Option<String> {
    let text = text.into();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
