use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main command-line interface for the handoff plan tool
///
/// Handoff composes and inspects orchestrated plan messages: the
/// machine-readable contracts an orchestrating process hands to a
/// tool-executing agent. The CLI can emit a demonstration payload,
/// render an existing plan document as markdown, and print the JSON
/// Schema of the wire format.
#[derive(Parser)]
#[command(version, about, name = "handoff")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the handoff CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Emit a demonstration plan payload as JSON
    #[command(alias = "d")]
    Demo {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Render a plan JSON document as markdown
    #[command(alias = "r")]
    Render {
        /// Path to a plan JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the JSON Schema of the plan wire format
    Schema,
}
