//! Command-line CO2 estimator and ventilation helper for classrooms.
//!
//! The `classair` binary predicts how CO2 builds up in a classroom over a
//! session and suggests a ventilation routine for the current window and
//! heating/cooling settings.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `predict` | End-of-session estimate, tier, heat loss and routine |
//! | `series` | Minute-by-minute estimate |
//! | `chart` | Terminal chart with the 1000/1500 ppm reference lines |
//! | `config` | Manage CLI configuration |
//! | `completions` | Generate shell completions |
//!
//! # Output Formats
//!
//! - **Text** (default): Human-readable colored output
//! - **JSON**: Machine-readable JSON format
//! - **CSV**: Comma-separated values for spreadsheets and data analysis
//!
//! # Configuration
//!
//! The CLI stores configuration in `~/.config/classair/config.toml` (or
//! platform equivalent). Every classroom parameter can be given a default
//! there, along with `format`, `style` and `no_color`.
//!
//! # Environment Variables
//!
//! - `CLASSAIR_CONFIG`: Config file location
//! - `CLASSAIR_STYLE`: Default styling mode
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Examples
//!
//! Predict a full room with the windows shut:
//! ```bash
//! classair predict --students 30 --duration 50 --area 50
//! ```
//!
//! Winter session with the window open and the heating on:
//! ```bash
//! classair predict -w open -H heating -t -5
//! ```
//!
//! Export the curve as CSV:
//! ```bash
//! classair series --format csv --output co2.csv
//! ```

// The binary lives in main.rs; this library only carries the crate docs.

pub use classair_core;
pub use classair_types;
