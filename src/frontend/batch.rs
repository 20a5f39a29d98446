//! Line-oriented adapter for pipes and scripts
//!
//! Each input line is a run of whitespace-separated key tokens. After the
//! line is pressed through, the display is written once.

use super::FrontendError;
use crate::config::OutputFormat;
use crate::keymap::KeyInput;
use crate::runtime::{Calculator, WriterNotifier};
use crate::state_machine::Display;
use std::io::{BufRead, Write};

/// Press every line of `input`, writing displays to `out` and notices to `err`
pub fn run<R, W, E>(
    input: R,
    mut out: W,
    err: E,
    format: OutputFormat,
) -> Result<(), FrontendError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut calculator = Calculator::new(WriterNotifier::new(err));
    let mut lines = 0usize;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        for token in line.split_whitespace() {
            for key in KeyInput::parse_token(token) {
                if calculator.press(key).is_none() {
                    tracing::warn!(?key, token, "Skipping unknown key");
                }
            }
        }

        write_display(&mut out, &calculator.display(), format)?;
        lines += 1;
    }

    out.flush()?;
    tracing::info!(lines, "Batch input finished");
    Ok(())
}

fn write_display<W: Write>(
    out: &mut W,
    display: &Display,
    format: OutputFormat,
) -> Result<(), FrontendError> {
    match format {
        OutputFormat::Text if display.secondary.is_empty() => {
            writeln!(out, "{}", display.primary)?;
        }
        OutputFormat::Text => writeln!(out, "{} | {}", display.secondary, display.primary)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, display)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
