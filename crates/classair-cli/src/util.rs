//! Utility functions for CLI operations.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::format::CHART_LABEL_WIDTH;

/// Fallback plot width when the terminal size is unknown.
const DEFAULT_CHART_WIDTH: usize = 60;

/// Write output to file or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Local wall-clock time as `HH:MM`, shown in report titles.
pub fn current_time_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Plot width for a chart: the explicit value, else whatever fits the terminal.
pub fn chart_width(explicit: Option<u16>) -> usize {
    if let Some(width) = explicit {
        return usize::from(width);
    }
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .map(|w| w.saturating_sub(CHART_LABEL_WIDTH + 1).clamp(20, 120))
        .unwrap_or(DEFAULT_CHART_WIDTH)
}
