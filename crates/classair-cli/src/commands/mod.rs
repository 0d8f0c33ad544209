//! Command implementations for the CLI.

mod chart;
mod config;
mod predict;
mod series;

pub use chart::cmd_chart;
pub use config::cmd_config;
pub use predict::cmd_predict;
pub use series::cmd_series;
