//! keypad-calc - four-function calculator
//!
//! A pure calculator state machine driven either by an interactive terminal
//! keypad or by key tokens piped on stdin.

mod config;
mod frontend;
mod keymap;
mod logging;
mod runtime;
mod state_machine;

use config::{CalcConfig, FrontendMode};
use std::io::{self, IsTerminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let config = CalcConfig::from_env();

    // Initialize logging
    logging::init(&config.log_path)?;

    let use_tui = match config.frontend {
        FrontendMode::Tui => true,
        FrontendMode::Batch => false,
        FrontendMode::Auto => io::stdin().is_terminal() && io::stdout().is_terminal(),
    };

    let mode = if use_tui { "tui" } else { "batch" };
    tracing::info!(
        frontend = mode,
        log_path = %config.log_path.display(),
        "Starting keypad-calc"
    );

    if use_tui {
        frontend::tui::run(&config)?;
    } else {
        frontend::batch::run(
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr(),
            config.output,
        )?;
    }

    tracing::info!("keypad-calc stopped");
    Ok(())
}
