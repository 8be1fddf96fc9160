//! Hashroute simulator
//!
//! Runs a router over an in-memory host and reports every command outcome
//! together with the router events it caused, one JSON object per line.

pub mod cli;
mod commands;
mod state;

use std::io::{self, BufRead, Write};

use cli::{Cli, Commands};
pub use commands::{CommandOutput, CommandResult, ScriptCommand};
pub use state::AppState;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::new(cli.manifest.as_deref(), &cli.base)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run { lines } => {
            if lines.is_empty() {
                for line in io::stdin().lock().lines() {
                    write_output(&mut out, &state, &line?)?;
                }
            } else {
                for line in &lines {
                    write_output(&mut out, &state, line)?;
                }
            }
        }
        Commands::Routes => {
            let output = state.execute_line("routes");
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

fn write_output(out: &mut impl Write, state: &AppState, line: &str) -> anyhow::Result<()> {
    if ScriptCommand::is_blank(line) {
        return Ok(());
    }
    let output = state.execute_line(line);
    writeln!(out, "{}", serde_json::to_string(&output)?)?;
    Ok(())
}
