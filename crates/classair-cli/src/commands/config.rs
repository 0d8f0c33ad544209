//! Config command implementation.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::util::write_output;

/// Run a config subcommand. `config` is the file as already loaded at
/// startup; `set` and `unset` re-read it strictly before writing.
pub fn cmd_config(
    action: ConfigAction,
    config: &Config,
    output: Option<&PathBuf>,
    quiet: bool,
) -> Result<()> {
    let path = Config::path();

    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(config)?;
            write_output(output, &content)?;
        }
        ConfigAction::Get { key } => match config.get(key) {
            Some(value) => write_output(output, &format!("{}\n", value))?,
            None => bail!("{:?} is not set", key),
        },
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_for_edit(&path)?;
            config.set(key, &value)?;
            config.save_to(&path)?;
            if !quiet {
                eprintln!("Set {:?} = {}", key, value);
            }
        }
        ConfigAction::Unset { key } => {
            let mut config = Config::load_for_edit(&path)?;
            config.unset(key);
            config.save_to(&path)?;
            if !quiet {
                eprintln!("Unset {:?}", key);
            }
        }
        ConfigAction::Path => {
            write_output(output, &format!("{}\n", path.display()))?;
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {}\nUse --force to overwrite it.",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            if !quiet {
                eprintln!("Created config file: {}", path.display());
            }
        }
    }

    Ok(())
}
