use std::io;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;
mod style;
mod util;

use cli::{Cli, Commands, resolve_format};
use commands::{cmd_chart, cmd_config, cmd_predict, cmd_series};
use config::{Config, resolve_input};
use format::FormatOptions;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "classair", &mut io::stdout());
        return Ok(());
    }

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load();
    let style = cli.style.or_else(|| config.style_mode()).unwrap_or_default();
    let no_color = cli.no_color || config.no_color;
    let opts = FormatOptions::new(no_color, style).with_compact(cli.compact);

    if let Some(ref path) = cli.output {
        tracing::debug!("Output will be written to: {}", path.display());
    }

    match cli.command {
        Commands::Predict { classroom, output } => {
            let input = resolve_input(&classroom, &config);
            let format = resolve_format(cli.json, output.format, config.format.as_deref());
            let opts = opts.with_no_header(output.no_header);
            cmd_predict(&input, format, cli.output.as_ref(), &opts)?;
        }
        Commands::Series { classroom, output } => {
            let input = resolve_input(&classroom, &config);
            let format = resolve_format(cli.json, output.format, config.format.as_deref());
            let opts = opts.with_no_header(output.no_header);
            cmd_series(&input, format, cli.output.as_ref(), &opts)?;
        }
        Commands::Chart {
            classroom,
            width,
            height,
        } => {
            if cli.json {
                bail!("chart only draws text; use `series --json` for the data");
            }
            let input = resolve_input(&classroom, &config);
            cmd_chart(&input, width, height, cli.output.as_ref(), &opts)?;
        }
        Commands::Config { action } => {
            cmd_config(action, &config, cli.output.as_ref(), cli.quiet)?;
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
