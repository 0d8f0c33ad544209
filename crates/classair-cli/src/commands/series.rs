//! Series command implementation.

use std::path::PathBuf;

use anyhow::Result;

use classair_core::{InputValidator, series};
use classair_types::ClassroomInput;

use crate::cli::OutputFormat;
use crate::format::{FormatOptions, format_series_csv, format_series_json, format_series_text};
use crate::util::write_output;

pub fn cmd_series(
    input: &ClassroomInput,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    InputValidator::default().check(input)?;

    let curve = series(
        input.students,
        input.duration_minutes,
        input.area_m2,
        input.window_state,
    );
    tracing::debug!("Generated {} series points", curve.len());

    let content = match format {
        OutputFormat::Json => format_series_json(&curve, opts)?,
        OutputFormat::Csv => format_series_csv(&curve, opts),
        OutputFormat::Text => format_series_text(&curve, opts),
    };

    write_output(output, &content)?;
    Ok(())
}
