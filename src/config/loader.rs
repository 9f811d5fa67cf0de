use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bon::Builder;
use log::info;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::common::{PROJECT_NAME, PROJECT_VERSION, project_config_dir};

const CONFIG_FILE_NAME: &str = "config.toml";

/// How prompts are presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PromptConfig {
    /// Pre-select values found in the previous manifest (default: true)
    #[serde(default = "default_true")]
    #[builder(default = true)]
    pub prefill_from_previous: bool,
    /// Show the help line under each menu (default: true)
    #[serde(default = "default_true")]
    #[builder(default = true)]
    pub show_help: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prefill_from_previous: true,
            show_help: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prompts: PromptConfig,
}

#[derive(Tabled)]
struct ConfigDisplay {
    prefill_from_previous: bool,
    show_help: bool,
}

impl From<&Config> for ConfigDisplay {
    fn from(config: &Config) -> Self {
        Self {
            prefill_from_previous: config.prompts.prefill_from_previous,
            show_help: config.prompts.show_help,
        }
    }
}

impl Config {
    pub(crate) fn load_existing(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let config: Config =
            toml::from_str(&config_string).context("Unable to deserialize configuration data")?;

        Ok(config)
    }

    pub(crate) fn load_or_default(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            Config::load_existing(config_file)
        } else {
            info!(
                "no configuration at {}, using defaults",
                config_file.display()
            );
            Ok(Config::default())
        }
    }

    pub(crate) fn save_to(&self, config_file: &Path) -> Result<()> {
        let config_string =
            toml::to_string_pretty(self).context("Unable to serialize configuration data")?;

        let mut fd = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(config_file)
            .with_context(|| format!("Unable to write {}", config_file.display()))?;

        fd.write_all(config_string.as_bytes()).with_context(|| {
            format!("Failed to write configuration to {}", config_file.display())
        })?;

        Ok(())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(project_config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Config::path()?)
    }

    pub fn load() -> Result<Self> {
        Config::load_or_default(&Config::path()?)
    }
}

/// Name and version line followed by the settings table.
pub(crate) fn render_configuration(config: &Config) -> String {
    let display = ConfigDisplay::from(config);
    let mut table = Table::new([display]);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));

    format!("{PROJECT_NAME} {PROJECT_VERSION}\n{table}")
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

pub fn show_configuration() -> Result<()> {
    let config = Config::load()?;

    println!("{}", render_configuration(&config));

    Ok(())
}
