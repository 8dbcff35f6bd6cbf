//! Layered configuration.
//!
//! Sources, later ones win:
//! - Default values
//! - TOML configuration file (`--config <path>`, or the nearest `.walknet/settings.toml`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `WALKNET_` and use double
//! underscores to separate nested levels:
//! - `WALKNET_OUTPUT__FILE_NAME=walks.net` sets `output.file_name`
//! - `WALKNET_INPUT__SKIP_HIDDEN=true` sets `input.skip_hidden`
//! - `WALKNET_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "WALKNET_";
pub const WORKSPACE_DIR: &str = ".walknet";
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Walk file discovery and decoding
    #[serde(default)]
    pub input: InputConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InputConfig {
    /// Files ending in this extension are gunzipped while reading
    #[serde(default = "default_gzip_extension")]
    pub gzip_extension: String,

    /// Ignore dot-files when the input is a directory
    #[serde(default = "default_false")]
    pub skip_hidden: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// File name used when no output path is given; placed next to the walks
    #[serde(default = "default_output_file_name")]
    pub file_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for every module (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `walknet::ingest = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_gzip_extension() -> String {
    "gz".to_string()
}
fn default_output_file_name() -> String {
    "graph.nt".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            gzip_extension: default_gzip_extension(),
            skip_hidden: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_output_file_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from defaults, the workspace settings file (if any) and the environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment(Self::find_workspace_config().as_deref())
            .extract()
            .map_err(Box::new)
    }

    /// Load configuration from a specific file instead of the workspace one.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(Some(path.as_ref()))
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nesting; single underscores stay in field names
        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
        )
    }

    /// Find `.walknet/settings.toml`, searching from the current directory up to root.
    pub fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(WORKSPACE_DIR).join(SETTINGS_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Render the settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
