//! Display implementations for plan messages.
//!
//! Plans format as readable markdown for terminal rendering. This is
//! presentation only; the wire document always goes through
//! [`crate::payload`], never through these impls.

use std::fmt;

use crate::models::{
    ActionCall, AskFieldType, AskRequest, Issue, PartialOutcome, PartialResult, Plan, PlanStatus,
    SafetyInfo,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for AskFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PartialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ActionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.tool)?;
        if let Some(label) = &self.label {
            write!(f, " — {label}")?;
        }
        if let Some(args) = &self.args {
            if !args.is_empty() {
                let rendered = serde_json::to_string(args).map_err(|_| fmt::Error)?;
                write!(f, " {rendered}")?;
            }
        }
        match self.confirm {
            Some(true) => write!(f, " (confirm first)"),
            Some(false) => write!(f, " (no confirmation needed)"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**: {}", self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        if let Some(recoverable) = self.recoverable {
            if recoverable {
                write!(f, " [recoverable]")?;
            } else {
                write!(f, " [not recoverable]")?;
            }
        }
        if let Some(hint) = &self.hint {
            write!(f, " — hint: {hint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PartialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.outcome)?;
        if let Some(detail) = &self.detail {
            write!(f, " — {detail}")?;
        }
        Ok(())
    }
}

impl fmt::Display for AskRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.prompt)?;
        for field in &self.fields {
            write!(f, "- {} ({})", field.name, field.field_type)?;
            if field.required == Some(true) {
                write!(f, " *required*")?;
            }
            if let Some(options) = &field.options {
                write!(f, " [{}]", options.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for SafetyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(writes) = self.writes_code {
            writeln!(f, "- Writes code: {}", if writes { "yes" } else { "no" })?;
        }
        if let Some(files) = &self.touches_files {
            writeln!(f, "- Touches files: {}", files.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instruction.is_empty() {
            writeln!(f, "# Plan")?;
        } else {
            writeln!(f, "# {}", self.instruction)?;
        }
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Version: {}", self.version)?;
        if let Some(id) = &self.correlation_id {
            writeln!(f, "- Correlation: {id}")?;
        }

        if !self.next_actions.is_empty() {
            writeln!(f, "\n## Next actions")?;
            writeln!(f)?;
            for (position, action) in self.next_actions.iter().enumerate() {
                writeln!(f, "{}. {}", position + 1, action)?;
            }
        }

        if let Some(errors) = &self.errors {
            writeln!(f, "\n## Errors")?;
            writeln!(f)?;
            for issue in errors {
                writeln!(f, "- {issue}")?;
            }
        }

        if let Some(warnings) = &self.warnings {
            writeln!(f, "\n## Warnings")?;
            writeln!(f)?;
            for issue in warnings {
                writeln!(f, "- {issue}")?;
            }
        }

        if let Some(missing) = &self.missing {
            writeln!(f, "\n## Missing inputs")?;
            writeln!(f)?;
            for name in missing {
                writeln!(f, "- {name}")?;
            }
        }

        if let Some(results) = &self.partial_results {
            writeln!(f, "\n## Partial results")?;
            writeln!(f)?;
            for result in results {
                writeln!(f, "- {result}")?;
            }
        }

        if let Some(ask) = &self.ask {
            writeln!(f, "\n## Ask")?;
            writeln!(f)?;
            write!(f, "{ask}")?;
        }

        if let Some(recovery) = &self.recovery_actions {
            writeln!(f, "\n## Recovery actions")?;
            writeln!(f)?;
            for (position, action) in recovery.iter().enumerate() {
                writeln!(f, "{}. {}", position + 1, action)?;
            }
        }

        if let Some(safety) = &self.safety {
            writeln!(f, "\n## Safety")?;
            writeln!(f)?;
            write!(f, "{safety}")?;
        }

        if let Some(paths) = &self.affected_paths {
            writeln!(f, "\n## Affected paths")?;
            writeln!(f)?;
            for path in paths {
                writeln!(f, "- {path}")?;
            }
        }

        if let Some(follow_up) = &self.follow_up {
            writeln!(f, "\n## Follow-up")?;
            writeln!(f)?;
            writeln!(f, "{follow_up}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::builder::PlanBuilder;
    use crate::models::{AskFieldType, PartialOutcome};

    #[test]
    fn test_plan_display_contains_sections() {
        let plan = PlanBuilder::new()
            .with_instruction("Scaffold Payroll screen and components.")
            .add_next_action(
                "create_screen",
                Some(json!({"screen": "Payroll"})),
                Some("Create the screen"),
                Some(true),
            )
            .with_follow_up("Wire the new components to the API now?")
            .with_safety(Some(true), Some(vec!["src/modules/payroll/**".to_string()]))
            .add_warning("STYLE", "Screen name is generic.", None, None)
            .build();

        let output = format!("{plan}");

        assert!(output.contains("# Scaffold Payroll screen and components."));
        assert!(output.contains("- Status: ok"));
        assert!(output.contains("## Next actions"));
        assert!(output.contains("1. `create_screen` — Create the screen"));
        assert!(output.contains("(confirm first)"));
        assert!(output.contains("## Warnings"));
        assert!(output.contains("**STYLE**: Screen name is generic."));
        assert!(output.contains("## Safety"));
        assert!(output.contains("- Writes code: yes"));
        assert!(output.contains("## Follow-up"));
        assert!(output.contains("Wire the new components to the API now?"));
    }

    #[test]
    fn test_plan_display_skips_absent_sections() {
        let output = format!("{}", PlanBuilder::new().build());

        assert!(output.contains("# Plan"));
        assert!(!output.contains("## Next actions"));
        assert!(!output.contains("## Errors"));
        assert!(!output.contains("## Ask"));
        assert!(!output.contains("## Follow-up"));
    }

    #[test]
    fn test_blocked_plan_display() {
        let plan = PlanBuilder::new()
            .permission_blocked(None, Some("Ask an admin"))
            .add_recovery_action("request_access", None, Some("Request access"), None)
            .add_ask_field(
                "role",
                AskFieldType::Select,
                true,
                Some(vec!["admin".to_string(), "editor".to_string()]),
            )
            .add_partial_result("fetch_user", PartialOutcome::Failed, Some("permission denied"))
            .build();

        let output = format!("{plan}");

        assert!(output.contains("- Status: blocked"));
        assert!(output.contains("**PERMISSION**: Insufficient permissions."));
        assert!(output.contains("[not recoverable]"));
        assert!(output.contains("— hint: Ask an admin"));
        assert!(output.contains("## Recovery actions"));
        assert!(output.contains("Please provide:"));
        assert!(output.contains("- role (select) *required* [admin, editor]"));
        assert!(output.contains("- fetch_user: failed — permission denied"));
    }
}
