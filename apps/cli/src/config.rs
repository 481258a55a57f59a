//! Layered settings: defaults → TOML file → `ALBUMKIT_*` env → CLI flags.

use std::path::{Path, PathBuf};

use albumkit_log::Format;
use albumkit_validator::validators::BracketMode;
use anyhow::{Context, bail};
use clap::ValueEnum;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "albumkit.toml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `ok` / `invalid` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Default GUID bracket handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidBrackets {
    #[default]
    Lenient,
    Paired,
}

impl From<GuidBrackets> for BracketMode {
    fn from(value: GuidBrackets) -> Self {
        match value {
            GuidBrackets::Lenient => Self::Lenient,
            GuidBrackets::Paired => Self::Paired,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_format: Format,
    pub output: OutputFormat,
    pub guid_brackets: GuidBrackets,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: Format::Compact,
            output: OutputFormat::Text,
            guid_brackets: GuidBrackets::Lenient,
        }
    }
}

/// Values given as command-line flags; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_format: Option<Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format,
            output: cli.output,
        }
    }
}

impl Settings {
    /// Defaults, the TOML file, then `ALBUMKIT_*` variables.
    ///
    /// `ALBUMKIT_LOG` is accepted as a shorthand for `ALBUMKIT_LOG_LEVEL`.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let file = config_file.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("ALBUMKIT_").map(|key| {
                if key.as_str().eq_ignore_ascii_case("log") {
                    "log_level".into()
                } else {
                    key.into()
                }
            }))
    }

    /// Resolves every layer, with command-line flags on top.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        if let Some(path) = &cli.config
            && !path.is_file()
        {
            bail!("config file {} does not exist", path.display());
        }

        let settings: Self = Self::figment(cli.config.as_deref())
            .merge(Serialized::defaults(Overrides::from(cli)))
            .extract()
            .context("invalid configuration")?;
        Ok(settings)
    }

    /// Logger configuration derived from these settings.
    pub fn log_config(&self) -> albumkit_log::Config {
        albumkit_log::Config {
            level: self.log_level.clone(),
            format: self.log_format,
            ..albumkit_log::Config::default()
        }
    }
}
