//! Connection settings: flags, then environment, then a YAML config file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

pub const URL_ENV: &str = "PLANKA_URL";
pub const TOKEN_ENV: &str = "PLANKA_TOKEN";
pub const PROJECT_ENV: &str = "PLANKA_PROJECT";
pub const BOARD_ENV: &str = "PLANKA_BOARD";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("No {field} configured (pass {flag} or set {env})")]
    #[diagnostic(
        code(plankacli::config::missing),
        help("Values can also be set in the YAML config file, see --config")
    )]
    Missing {
        field: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("Failed to read config file {}", .path.display())]
    #[diagnostic(code(plankacli::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}", .path.display())]
    #[diagnostic(
        code(plankacli::config::parse),
        help("Expected YAML with any of the keys: url, token, project, board")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub project: Option<String>,
    pub board: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub url: Option<String>,
    pub token: Option<String>,
    pub project: Option<String>,
    pub board: Option<String>,
}

/// Fully resolved connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub token: String,
    pub project: String,
    pub board: String,
}

/// Default config file location.
///
/// `$XDG_CONFIG_HOME/plankacli/config.yaml`, falling back to
/// `~/.config/plankacli/config.yaml`.
pub fn default_config_path(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let config_home = lookup("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_home.join("plankacli").join("config.yaml"))
}

/// Read and parse a config file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Resolve settings using the process environment.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    ///
    /// An explicitly given config file must exist; the default one is optional.
    pub fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match &overrides.config_path {
            Some(path) => load_file(path)?,
            None => match default_config_path(&lookup) {
                Some(path) if path.is_file() => load_file(&path)?,
                _ => FileConfig::default(),
            },
        };

        let pick = |flag_value: Option<String>,
                    file_value: Option<String>,
                    field: &'static str,
                    flag: &'static str,
                    env: &'static str| {
            flag_value
                .or_else(|| lookup(env))
                .or(file_value)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing { field, flag, env })
        };

        Ok(Self {
            url: pick(overrides.url, file.url, "url", "--url", URL_ENV)?,
            token: pick(overrides.token, file.token, "token", "--token", TOKEN_ENV)?,
            project: pick(
                overrides.project,
                file.project,
                "project",
                "--project",
                PROJECT_ENV,
            )?,
            board: pick(overrides.board, file.board, "board", "--board", BOARD_ENV)?,
        })
    }
}
