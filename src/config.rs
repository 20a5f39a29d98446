//! Startup configuration from environment variables
//!
//! Invalid values fall back to defaults.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "keypad_calc=info";

const DEFAULT_HIGHLIGHT_MS: u64 = 150;

/// Which presentation adapter to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontendMode {
    /// TUI when stdin and stdout are terminals, batch otherwise
    #[default]
    Auto,
    Tui,
    Batch,
}

impl FromStr for FrontendMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "tui" => Ok(Self::Tui),
            "batch" => Ok(Self::Batch),
            _ => Err(()),
        }
    }
}

/// How batch mode prints the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    pub frontend: FrontendMode,
    pub output: OutputFormat,
    /// How long an activated keypad button stays highlighted
    pub highlight: Duration,
    pub log_path: PathBuf,
}

impl CalcConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let frontend = lookup("KEYPAD_FRONTEND")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let output = lookup("KEYPAD_OUTPUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let highlight_ms = lookup("KEYPAD_HIGHLIGHT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_HIGHLIGHT_MS);

        let log_path = lookup("KEYPAD_LOG_PATH").map_or_else(
            || {
                let home = lookup("HOME").unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(format!("{home}/.keypad-calc/keypad-calc.log"))
            },
            PathBuf::from,
        );

        Self {
            frontend,
            output,
            highlight: Duration::from_millis(highlight_ms),
            log_path,
        }
    }
}
