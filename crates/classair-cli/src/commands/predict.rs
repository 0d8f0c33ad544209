//! Predict command implementation.

use std::path::PathBuf;

use anyhow::Result;

use classair_core::{InputValidator, Prediction};
use classair_types::ClassroomInput;

use crate::cli::OutputFormat;
use crate::format::{
    FormatOptions, format_prediction_csv, format_prediction_json, format_prediction_text,
};
use crate::util::{current_time_hhmm, write_output};

pub fn cmd_predict(
    input: &ClassroomInput,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let prediction = Prediction::compute_checked(input, &InputValidator::default())?;

    tracing::debug!(
        "Predicted {:.2} ppm ({}) after {} min",
        prediction.final_ppm,
        prediction.tier(),
        input.duration_minutes
    );

    let content = match format {
        OutputFormat::Json => format_prediction_json(&prediction, opts)?,
        OutputFormat::Csv => format_prediction_csv(&prediction, opts),
        OutputFormat::Text => format_prediction_text(&prediction, &current_time_hhmm(), opts),
    };

    write_output(output, &content)?;
    Ok(())
}
