use std::path::Path;

use config::builder::{ConfigBuilder, DefaultState};
use eyre::{Context, Result};
use nxcube_core::BorderSpin;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "NXCUBE";

/// Settings that can be set in a file or the environment and overridden on
/// the command line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub dimension: usize,
    pub border_spin: BorderSpin,
    pub scramble_length: u32,
    pub output: OutputFormat,
}

/// Format for command output.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl Settings {
    /// Loads settings from the built-in defaults, then `path` (if any), then
    /// `NXCUBE_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults();
        if let Some(path) = path {
            log::info!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).format(SETTINGS_FILE_FORMAT));
        }
        config = config.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::build(config)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        config::Config::builder().add_source(config::File::from_str(
            DEFAULT_SETTINGS_STR,
            SETTINGS_FILE_FORMAT,
        ))
    }

    fn build(config: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .context("error loading settings")?;
        log::debug!("loaded settings {settings:?}");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::build(Settings::defaults()).unwrap();
        assert_eq!(
            settings,
            Settings {
                dimension: nxcube_core::DEFAULT_DIMENSION,
                border_spin: BorderSpin::MatchSlice,
                scramble_length: 0,
                output: OutputFormat::Text,
            },
        );
    }

    #[test]
    fn test_layered_settings() {
        let user_file = config::File::from_str(
            "dimension: 5\nborder_spin: always_clockwise\n",
            SETTINGS_FILE_FORMAT,
        );
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(
                [
                    ("NXCUBE_DIMENSION".to_owned(), "7".to_owned()),
                    ("NXCUBE_OUTPUT".to_owned(), "yaml".to_owned()),
                ]
                .into_iter()
                .collect(),
            ));

        let settings =
            Settings::build(Settings::defaults().add_source(user_file).add_source(env)).unwrap();
        assert_eq!(settings.dimension, 7);
        assert_eq!(settings.border_spin, BorderSpin::AlwaysClockwise);
        assert_eq!(settings.scramble_length, 0);
        assert_eq!(settings.output, OutputFormat::Yaml);
    }

    #[test]
    fn test_invalid_settings() {
        let user_file = config::File::from_str("border_spin: sideways\n", SETTINGS_FILE_FORMAT);
        assert!(Settings::build(Settings::defaults().add_source(user_file)).is_err());
    }
}
