//! Output formatting utilities for text, JSON, and CSV output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use classair_core::{Co2Series, Co2Tier, DANGER_PPM, MODERATE_PPM, Prediction};

use crate::cli::StyleMode;
use crate::style;

/// Formatting options for output.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
    /// Visual styling mode.
    pub style: StyleMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            no_color: false,
            no_header: false,
            compact: false,
            style: StyleMode::Rich,
        }
    }
}

impl FormatOptions {
    pub fn new(no_color: bool, style: StyleMode) -> Self {
        // Plain mode automatically disables colors for pipe-friendliness
        let effective_no_color = no_color || style == StyleMode::Plain;
        Self {
            no_color: effective_no_color,
            no_header: false,
            compact: false,
            style,
        }
    }

    /// Check if plain styling is enabled (no decorations).
    pub fn is_plain(&self) -> bool {
        self.style == StyleMode::Plain
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    /// Format a temperature. Plain mode stays ASCII-only.
    #[must_use]
    pub fn format_temp(&self, celsius: f64) -> String {
        if self.is_plain() {
            format!("{:.1}C", celsius)
        } else {
            format!("{:.1}°C", celsius)
        }
    }

    /// Format an area. Plain mode stays ASCII-only.
    #[must_use]
    pub fn format_area(&self, m2: f64) -> String {
        if self.is_plain() {
            format!("{} m2", m2)
        } else {
            format!("{} m²", m2)
        }
    }

    /// Format a volume. Plain mode stays ASCII-only.
    #[must_use]
    pub fn format_volume(&self, m3: f64) -> String {
        if self.is_plain() {
            format!("{} m3", m3)
        } else {
            format!("{} m³", m3)
        }
    }
}

/// Escape a value for CSV output.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn minute_label(minute: Option<u32>) -> String {
    minute
        .map(|m| format!("minute {}", m))
        .unwrap_or_else(|| "not reached".to_string())
}

// ============================================================================
// Prediction
// ============================================================================

/// Format a full prediction report.
///
/// `generated_at` is the wall-clock time shown in the title.
pub fn format_prediction_text(
    prediction: &Prediction,
    generated_at: &str,
    opts: &FormatOptions,
) -> String {
    let input = &prediction.input;
    let advisory = &prediction.advisory;
    let nc = opts.no_color;
    let mut out = String::new();

    out.push_str(&style::section_header(
        &format!("Classroom ({})", generated_at),
        opts.style,
        nc,
    ));
    out.push_str(&format!("  Students       {}\n", input.students));
    out.push_str(&format!("  Session        {} min\n", input.duration_minutes));
    out.push_str(&format!(
        "  Area           {} ({})\n",
        opts.format_area(input.area_m2),
        opts.format_volume(prediction.volume_m3)
    ));
    out.push_str(&format!("  Window         {}\n", input.window_state));
    out.push_str(&format!("  HVAC           {}\n", input.hvac_state));
    out.push_str(&format!(
        "  Outside temp   {}\n",
        opts.format_temp(input.outside_temp_c)
    ));
    out.push('\n');

    out.push_str(&style::section_header("Prediction", opts.style, nc));
    out.push_str(&format!(
        "  Estimated CO2  {} ppm [{}]\n",
        style::format_ppm_colored(prediction.final_ppm, nc),
        style::format_tier(advisory.tier, nc)
    ));
    out.push_str(&format!(
        "  {} {}: {}\n",
        style::bullet(opts.style),
        advisory.tier.description(),
        advisory.tier.action()
    ));
    out.push_str(&format!(
        "  Ventilate from {} ({} ppm)\n",
        minute_label(prediction.moderate_at_minute),
        MODERATE_PPM
    ));
    out.push_str(&format!(
        "  Danger from    {} ({} ppm)\n",
        minute_label(prediction.danger_at_minute),
        DANGER_PPM
    ));
    out.push_str(&format!(
        "  Total exhaled  {:.1} L\n",
        prediction.total_emitted_liters
    ));
    out.push('\n');

    out.push_str(&style::section_header("Heat loss", opts.style, nc));
    match &advisory.heat_loss {
        Some(loss) => {
            out.push_str(&format!(
                "  Indoor/outdoor difference  {}\n",
                opts.format_temp(loss.temp_diff_c)
            ));
            out.push_str(&format!(
                "  Heat-loss index            {:.2} ({})\n",
                loss.index,
                style::format_heat_loss_level(loss.level, nc)
            ));
            out.push_str(&format!(
                "  {} {}. {}\n",
                style::bullet(opts.style),
                loss.level.summary(),
                loss.level.recommendation()
            ));
        }
        None => {
            out.push_str("  No heat loss while heating/cooling is off\n");
        }
    }
    out.push('\n');

    out.push_str(&style::section_header("Ventilation routine", opts.style, nc));
    let routine_text = if nc {
        advisory.routine.text.to_string()
    } else {
        format!("{}", advisory.routine.text.bold())
    };
    out.push_str(&format!(
        "  {} {}\n",
        style::bullet(opts.style),
        routine_text
    ));
    out.push_str(&format!("  {}\n", advisory.routine.note.message()));

    out
}

/// Format a prediction as JSON, including the full series.
pub fn format_prediction_json(prediction: &Prediction, opts: &FormatOptions) -> Result<String> {
    opts.as_json(prediction)
}

/// Format a prediction as a single CSV row.
pub fn format_prediction_csv(prediction: &Prediction, opts: &FormatOptions) -> String {
    let input = &prediction.input;
    let advisory = &prediction.advisory;
    let mut output = if opts.no_header {
        String::new()
    } else {
        "students,duration_min,area_m2,window,hvac,outside_temp_c,final_ppm,tier,\
         total_emitted_l,moderate_at_min,danger_at_min,heat_loss_index,heat_loss_level,routine\n"
            .to_string()
    };

    let (loss_index, loss_level) = advisory
        .heat_loss
        .map(|l| (format!("{:.2}", l.index), l.level.to_string()))
        .unwrap_or_default();
    let opt_minute = |m: Option<u32>| m.map(|v| v.to_string()).unwrap_or_default();

    output.push_str(&format!(
        "{},{},{},{},{},{},{:.2},{},{:.1},{},{},{},{},{}\n",
        input.students,
        input.duration_minutes,
        input.area_m2,
        input.window_state.as_str(),
        input.hvac_state.as_str(),
        input.outside_temp_c,
        prediction.final_ppm,
        advisory.tier,
        prediction.total_emitted_liters,
        opt_minute(prediction.moderate_at_minute),
        opt_minute(prediction.danger_at_minute),
        loss_index,
        csv_escape(&loss_level),
        csv_escape(advisory.routine.text)
    ));
    output
}

// ============================================================================
// Series
// ============================================================================

/// One series row with its tier, for JSON output.
#[derive(Debug, Serialize)]
struct SeriesRow {
    minute: u32,
    ppm: f64,
    tier: Co2Tier,
}

fn series_rows(series: &Co2Series) -> Vec<SeriesRow> {
    series
        .iter()
        .map(|p| SeriesRow {
            minute: p.minute,
            ppm: p.ppm,
            tier: Co2Tier::from_ppm(p.ppm),
        })
        .collect()
}

/// Format a series as a table.
pub fn format_series_text(series: &Co2Series, opts: &FormatOptions) -> String {
    if series.is_empty() {
        return "No data points\n".to_string();
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Minute")]
        minute: u32,
        #[tabled(rename = "CO2 (ppm)")]
        ppm: String,
        #[tabled(rename = "Tier")]
        tier: String,
    }

    let rows: Vec<Row> = series
        .iter()
        .map(|p| Row {
            minute: p.minute,
            ppm: style::format_ppm_colored(p.ppm, opts.no_color),
            tier: style::format_tier(Co2Tier::from_ppm(p.ppm), opts.no_color),
        })
        .collect();

    let mut table = Table::new(rows);
    style::apply_table_style(&mut table, opts.style);
    format!("{}\n", table)
}

/// Format a series as a JSON array.
pub fn format_series_json(series: &Co2Series, opts: &FormatOptions) -> Result<String> {
    opts.as_json(&series_rows(series))
}

/// Format a series as CSV.
pub fn format_series_csv(series: &Co2Series, opts: &FormatOptions) -> String {
    let mut output = if opts.no_header {
        String::new()
    } else {
        "minute,ppm,tier\n".to_string()
    };
    for p in series {
        output.push_str(&format!(
            "{},{:.2},{}\n",
            p.minute,
            p.ppm,
            Co2Tier::from_ppm(p.ppm)
        ));
    }
    output
}

// ============================================================================
// Chart
// ============================================================================

/// Width of the y-axis label column, including the axis line.
pub const CHART_LABEL_WIDTH: usize = 9;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Moderate,
    Danger,
    Point,
}

/// Rows for the Moderate and Danger lines. On a tall y-axis both thresholds
/// can land on one row; the lines are then split onto adjacent rows so each
/// stays visible under its own label.
fn reference_rows(moderate_row: usize, danger_row: usize, height: usize) -> (usize, usize) {
    if danger_row < moderate_row {
        (moderate_row, danger_row)
    } else if moderate_row + 1 < height {
        (moderate_row + 1, danger_row)
    } else {
        (moderate_row, moderate_row.saturating_sub(1))
    }
}

/// Render the series as an ASCII line chart with the Moderate and Danger
/// thresholds drawn as horizontal reference lines.
pub fn format_chart(series: &Co2Series, width: usize, height: usize, opts: &FormatOptions) -> String {
    let Some(peak) = series.peak() else {
        return "No data points\n".to_string();
    };
    let width = width.max(1);
    let height = height.max(2);
    let n = series.len();
    let y_max = peak.max(DANGER_PPM) * 1.1;
    let row_of = |ppm: f64| -> usize {
        // Row 0 is the top of the plot
        let scaled = (ppm / y_max * height as f64).floor() as usize;
        height - 1 - scaled.min(height - 1)
    };

    let mut grid = vec![vec![Cell::Empty; width]; height];
    let (moderate_row, danger_row) =
        reference_rows(row_of(MODERATE_PPM), row_of(DANGER_PPM), height);
    for col in 0..width {
        grid[moderate_row][col] = Cell::Moderate;
        grid[danger_row][col] = Cell::Danger;
    }
    let points = series.points();
    for col in 0..width {
        let ppm = points[(col * n / width).min(n - 1)].ppm;
        grid[row_of(ppm)][col] = Cell::Point;
    }

    let (point_ch, moderate_ch, danger_ch, axis_ch, corner_ch, rule_ch) = if opts.is_plain() {
        ("*", "-", "=", "|", "+", "-")
    } else {
        ("●", "┄", "━", "│", "└", "─")
    };

    let mut out = String::new();
    out.push_str(&style::section_header(
        "Estimated CO2 during the session",
        opts.style,
        opts.no_color,
    ));

    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 || r == moderate_row || r == danger_row {
            let top = y_max * (height - r) as f64 / height as f64;
            let value = if r == moderate_row {
                MODERATE_PPM
            } else if r == danger_row {
                DANGER_PPM
            } else {
                top
            };
            format!("{:>7.0} ", value)
        } else {
            " ".repeat(CHART_LABEL_WIDTH - 1)
        };
        out.push_str(&label);
        out.push_str(axis_ch);
        for cell in row {
            let glyph = match cell {
                Cell::Empty => " ".to_string(),
                Cell::Point if opts.no_color => point_ch.to_string(),
                Cell::Point => format!("{}", point_ch.green()),
                Cell::Moderate if opts.no_color => moderate_ch.to_string(),
                Cell::Moderate => format!("{}", moderate_ch.yellow()),
                Cell::Danger if opts.no_color => danger_ch.to_string(),
                Cell::Danger => format!("{}", danger_ch.red()),
            };
            out.push_str(&glyph);
        }
        out.push('\n');
    }

    out.push_str(&" ".repeat(CHART_LABEL_WIDTH - 1));
    out.push_str(corner_ch);
    out.push_str(&rule_ch.repeat(width));
    out.push('\n');

    let last_label = format!("{} min", n);
    let gap = width.saturating_sub(1 + last_label.len());
    out.push_str(&" ".repeat(CHART_LABEL_WIDTH));
    out.push('1');
    out.push_str(&" ".repeat(gap));
    out.push_str(&last_label);
    out.push('\n');

    out.push_str(&format!(
        "{} estimated CO2   {} {} ppm (ventilate)   {} {} ppm (danger)\n",
        point_ch, moderate_ch, MODERATE_PPM, danger_ch, DANGER_PPM
    ));
    out
}
