//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use classair_types::{HvacState, WindowState};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse a format name as stored in the config file.
    pub fn from_config(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Visual styling mode for output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StyleMode {
    /// Standard styling with colors
    Minimal,
    /// Rich styling with tables and section headers (default)
    #[default]
    Rich,
    /// Plain ASCII text with no decorations (for scripting)
    Plain,
}

/// Classroom parameters shared by every estimating command.
///
/// Anything left out falls back to the config file, then to the built-in
/// defaults (30 students, 50 min, 50 m², window closed, HVAC off, 15°C).
#[derive(Debug, Clone, Default, Args)]
pub struct ClassroomArgs {
    /// Number of students (1-50)
    #[arg(short, long)]
    pub students: Option<u32>,

    /// Session length in minutes (10-120)
    #[arg(short, long)]
    pub duration: Option<u32>,

    /// Floor area in m² (10-100)
    #[arg(short, long)]
    pub area: Option<f64>,

    /// Window state: closed, cracked or open
    #[arg(short, long)]
    pub window: Option<WindowState>,

    /// Heating/cooling: off, cooling or heating
    #[arg(short = 'H', long)]
    pub hvac: Option<HvacState>,

    /// Outside temperature in °C (-20 to 50)
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub outside_temp: Option<f64>,
}

/// Reusable output format arguments
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output format (defaults to the config file, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Omit header row in CSV output (useful for appending)
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Parser)]
#[command(name = "classair")]
#[command(
    author,
    version,
    about = "Classroom CO2 estimator and ventilation helper",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Visual styling mode (minimal, rich, plain)
    #[arg(long, global = true, value_enum, env = "CLASSAIR_STYLE")]
    pub style: Option<StyleMode>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict end-of-session CO2 and show ventilation advice
    Predict {
        #[command(flatten)]
        classroom: ClassroomArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the minute-by-minute CO2 estimate
    Series {
        #[command(flatten)]
        classroom: ClassroomArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Draw the CO2 curve with the 1000/1500 ppm reference lines
    ///
    /// Text only: `--json` is rejected and `--compact` has no effect. Use
    /// `series` for machine-readable data.
    Chart {
        #[command(flatten)]
        classroom: ClassroomArgs,

        /// Plot width in columns (defaults to terminal width)
        #[arg(long, value_parser = clap::value_parser!(u16).range(10..=400))]
        width: Option<u16>,

        /// Plot height in rows
        #[arg(long, default_value = "16", value_parser = clap::value_parser!(u16).range(4..=100))]
        height: u16,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse boolean argument with flexible input
pub fn parse_bool_arg(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "enable" | "enabled" => Ok(true),
        "false" | "no" | "off" | "0" | "disable" | "disabled" => Ok(false),
        _ => Err(format!(
            "Invalid boolean value '{}'. Use: true/false, yes/no, on/off, 1/0",
            s
        )),
    }
}

/// Configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Default number of students
    Students,
    /// Default session length in minutes
    Duration,
    /// Default floor area in m²
    Area,
    /// Default window state
    Window,
    /// Default heating/cooling state
    Hvac,
    /// Default outside temperature in °C
    OutsideTemp,
    /// Default output format
    Format,
    /// Default styling mode
    Style,
    /// Disable colored output
    NoColor,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        #[arg(value_enum)]
        key: ConfigKey,
        /// Configuration value
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Unset (remove) a configuration value
    Unset {
        /// Configuration key to remove
        #[arg(value_enum)]
        key: ConfigKey,
    },

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Pick the output format: `--json` wins, then `--format`, then config.
pub fn resolve_format(
    json_flag: bool,
    explicit: Option<OutputFormat>,
    config_format: Option<&str>,
) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    explicit
        .or_else(|| config_format.and_then(OutputFormat::from_config))
        .unwrap_or_default()
}
