//! Chart command implementation.

use std::path::PathBuf;

use anyhow::Result;

use classair_core::{InputValidator, series};
use classair_types::ClassroomInput;

use crate::format::{FormatOptions, format_chart};
use crate::util::{chart_width, write_output};

pub fn cmd_chart(
    input: &ClassroomInput,
    width: Option<u16>,
    height: u16,
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
    let width = chart_width(width);
    tracing::debug!("Drawing {}x{} chart for {} points", width, height, curve.len());

    let content = format_chart(&curve, width, usize::from(height), opts);
    write_output(output, &content)?;
    Ok(())
}
