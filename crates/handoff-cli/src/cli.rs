//! Command handlers for the handoff CLI
//!
//! Each handler drives the core crate through its public surface: the
//! fluent builder for the demo payload, the serde wire contract for
//! rendering, and the schema feature for the wire format's JSON Schema.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use handoff_core::{Plan, PlanBuilder};
use log::debug;
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// CLI command handlers over the core plan crate
pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    /// Emit the demonstration plan payload as JSON on stdout.
    pub fn demo(&self, pretty: bool) -> Result<()> {
        debug!("demo: pretty={pretty}");

        let json = demo_builder()
            .build_json(pretty)
            .context("Failed to serialize demo plan")?;
        println!("{json}");
        Ok(())
    }

    /// Parse a plan document from `file` (or stdin) and render it as
    /// markdown.
    pub fn render(&self, file: Option<&Path>) -> Result<()> {
        let document = match file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?,
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read plan document from stdin")?;
                buffer
            }
        };

        let plan: Plan =
            serde_json::from_str(&document).context("Failed to parse plan document")?;
        debug!("render: status={}, {} next actions", plan.status, plan.next_actions.len());

        self.renderer.render(&plan.to_string());
        Ok(())
    }

    /// Print the JSON Schema of the plan wire format.
    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(Plan);
        let json =
            serde_json::to_string_pretty(&schema).context("Failed to serialize plan schema")?;
        println!("{json}");
        Ok(())
    }
}

/// The canonical demonstration plan: scaffold a Payroll screen, flag the
/// code-writing risk, and queue a follow-up question.
fn demo_builder() -> PlanBuilder {
    PlanBuilder::new()
        .with_instruction("Scaffold Payroll screen and components.")
        .with_follow_up("Wire the new components to the API now?")
        .with_safety(Some(true), Some(vec!["src/modules/payroll/**".to_string()]))
        .add_next_action(
            "create_screen",
            Some(json!({
                "screen": "Payroll",
                "components": [
                    "OvertimeStartDaySelector",
                    "PayPeriodConfigurator",
                    "PTCHoursOverride",
                ],
            })),
            None,
            None,
        )
}
