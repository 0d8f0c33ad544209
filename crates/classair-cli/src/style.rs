//! Visual styling utilities for the CLI.
//!
//! Colors follow the tier scheme used everywhere in the output: green for
//! Good, yellow for Moderate, red for Danger.

use owo_colors::OwoColorize;

use classair_core::{Co2Tier, HeatLossLevel};

use crate::cli::StyleMode;

/// Format a tier label with its color.
pub fn format_tier(tier: Co2Tier, no_color: bool) -> String {
    if no_color {
        return tier.to_string();
    }
    match tier {
        Co2Tier::Good => format!("{}", tier.green()),
        Co2Tier::Moderate => format!("{}", tier.yellow()),
        Co2Tier::Danger => format!("{}", tier.red().bold()),
    }
}

/// Format a ppm value with the color of its tier.
pub fn format_ppm_colored(ppm: f64, no_color: bool) -> String {
    let text = format!("{:.2}", ppm);
    if no_color {
        return text;
    }
    match Co2Tier::from_ppm(ppm) {
        Co2Tier::Good => format!("{}", text.green()),
        Co2Tier::Moderate => format!("{}", text.yellow()),
        Co2Tier::Danger => format!("{}", text.red()),
    }
}

/// Format a heat-loss level with a severity color.
pub fn format_heat_loss_level(level: HeatLossLevel, no_color: bool) -> String {
    if no_color {
        return level.to_string();
    }
    match level {
        HeatLossLevel::Negligible => format!("{}", level.green()),
        HeatLossLevel::Moderate => format!("{}", level.yellow()),
        // Orange (RGB: 255, 165, 0)
        HeatLossLevel::High => format!("{}", level.truecolor(255, 165, 0)),
    }
}

/// Section heading for text reports.
pub fn section_header(title: &str, style: StyleMode, no_color: bool) -> String {
    match style {
        StyleMode::Plain => format!("{}\n", title),
        StyleMode::Minimal | StyleMode::Rich if no_color => {
            format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
        }
        StyleMode::Minimal => format!("{}\n", title.bold()),
        StyleMode::Rich => format!(
            "{}\n{}\n",
            title.cyan().bold(),
            "─".repeat(title.chars().count()).dimmed()
        ),
    }
}

/// Arrow used before a recommendation.
pub fn bullet(style: StyleMode) -> &'static str {
    if style == StyleMode::Plain { "->" } else { "→" }
}

/// Apply the table style for the given styling mode.
pub fn apply_table_style(table: &mut tabled::Table, style: StyleMode) {
    use tabled::settings::Style;
    match style {
        StyleMode::Rich => {
            table.with(Style::rounded());
        }
        StyleMode::Minimal => {
            table.with(Style::psql());
        }
        StyleMode::Plain => {
            table.with(Style::blank());
        }
    }
}
