//! Handoff CLI Application
//!
//! Command-line interface for composing and inspecting orchestrated
//! plan messages.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let cli = Cli::new(TerminalRenderer::new(!no_color));

    info!("Handoff started");

    match command {
        Some(Commands::Demo { pretty }) => cli.demo(pretty),
        Some(Commands::Render { file }) => cli.render(file.as_deref()),
        Some(Commands::Schema) => cli.schema(),
        None => cli.demo(false),
    }
}
