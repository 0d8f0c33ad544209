//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use classair_types::{ClassroomInput, HvacState, WindowState};

use crate::cli::{ClassroomArgs, ConfigKey, StyleMode, parse_bool_arg};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CLASSAIR_CONFIG";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default styling mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,

    /// Default classroom parameters
    #[serde(default)]
    pub classroom: ClassroomDefaults,
}

/// Classroom parameters used when a flag is not given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassroomDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hvac: Option<HvacState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outside_temp: Option<f64>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("classair")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load the file at `path` for editing. A missing file is an empty
    /// config; an unreadable or malformed one is an error so it is never
    /// overwritten.
    pub fn load_for_edit(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Styling mode from the config file, if set and recognised.
    pub fn style_mode(&self) -> Option<StyleMode> {
        match self.style.as_deref()?.trim().to_lowercase().as_str() {
            "rich" => Some(StyleMode::Rich),
            "minimal" => Some(StyleMode::Minimal),
            "plain" => Some(StyleMode::Plain),
            _ => None,
        }
    }

    /// Current value of `key` as text, `None` when unset.
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        let c = &self.classroom;
        match key {
            ConfigKey::Students => c.students.map(|v| v.to_string()),
            ConfigKey::Duration => c.duration.map(|v| v.to_string()),
            ConfigKey::Area => c.area.map(|v| v.to_string()),
            ConfigKey::Window => c.window.map(|v| v.as_str().to_string()),
            ConfigKey::Hvac => c.hvac.map(|v| v.as_str().to_string()),
            ConfigKey::OutsideTemp => c.outside_temp.map(|v| v.to_string()),
            ConfigKey::Format => self.format.clone(),
            ConfigKey::Style => self.style.clone(),
            ConfigKey::NoColor => Some(self.no_color.to_string()),
        }
    }

    /// Parse `value` for `key` and store it.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let c = &mut self.classroom;
        match key {
            ConfigKey::Students => c.students = Some(parse_number(value, "students")?),
            ConfigKey::Duration => c.duration = Some(parse_number(value, "duration")?),
            ConfigKey::Area => c.area = Some(parse_number(value, "area")?),
            ConfigKey::Window => c.window = Some(value.parse()?),
            ConfigKey::Hvac => c.hvac = Some(value.parse()?),
            ConfigKey::OutsideTemp => {
                c.outside_temp = Some(parse_number(value, "outside temperature")?)
            }
            ConfigKey::Format => {
                if crate::cli::OutputFormat::from_config(value).is_none() {
                    bail!("Invalid format '{}'. Valid values: text, json, csv", value);
                }
                self.format = Some(value.trim().to_lowercase());
            }
            ConfigKey::Style => {
                let lowered = value.trim().to_lowercase();
                if !matches!(lowered.as_str(), "rich" | "minimal" | "plain") {
                    bail!("Invalid style '{}'. Valid values: rich, minimal, plain", value);
                }
                self.style = Some(lowered);
            }
            ConfigKey::NoColor => {
                self.no_color = parse_bool_arg(value).map_err(anyhow::Error::msg)?;
            }
        }
        Ok(())
    }

    /// Remove the stored value for `key`.
    pub fn unset(&mut self, key: ConfigKey) {
        let c = &mut self.classroom;
        match key {
            ConfigKey::Students => c.students = None,
            ConfigKey::Duration => c.duration = None,
            ConfigKey::Area => c.area = None,
            ConfigKey::Window => c.window = None,
            ConfigKey::Hvac => c.hvac = None,
            ConfigKey::OutsideTemp => c.outside_temp = None,
            ConfigKey::Format => self.format = None,
            ConfigKey::Style => self.style = None,
            ConfigKey::NoColor => self.no_color = false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("'{}' is not a valid {}", value, what))
}

/// Build the classroom input: flags first, then config, then built-in defaults.
pub fn resolve_input(args: &ClassroomArgs, config: &Config) -> ClassroomInput {
    let defaults = ClassroomInput::default();
    let c = &config.classroom;
    ClassroomInput {
        students: args.students.or(c.students).unwrap_or(defaults.students),
        duration_minutes: args
            .duration
            .or(c.duration)
            .unwrap_or(defaults.duration_minutes),
        area_m2: args.area.or(c.area).unwrap_or(defaults.area_m2),
        window_state: args.window.or(c.window).unwrap_or(defaults.window_state),
        hvac_state: args.hvac.or(c.hvac).unwrap_or(defaults.hvac_state),
        outside_temp_c: args
            .outside_temp
            .or(c.outside_temp)
            .unwrap_or(defaults.outside_temp_c),
    }
}
