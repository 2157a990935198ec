//! Config file handling

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::convert::{ConvertOptions, Format, DEFAULT_HEADER_WHITELIST};
use crate::errors::{ConvertError, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "REQCONV_CONFIG_DIR";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// reqconv configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Flags prepended to the command-line arguments
    pub default_options: Vec<String>,
    /// Output format used when no flag picks one
    pub default_output: Option<Format>,
    pub header_whitelist: Vec<String>,
    pub filter_httpie_headers: bool,
    pub nest_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults_in(Self::default_config_dir())
    }
}

impl Config {
    fn defaults_in(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            default_options: Vec::new(),
            default_output: None,
            header_whitelist: DEFAULT_HEADER_WHITELIST.iter().map(|s| s.to_string()).collect(),
            filter_httpie_headers: false,
            nest_fields: false,
        }
    }

    /// Load configuration from the default config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load configuration from `config.toml` in `config_dir`
    ///
    /// A missing file yields the defaults.
    pub fn load_from(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_file.exists() {
            debug!(path = %config_file.display(), "no config file, using defaults");
            return Ok(Self::defaults_in(config_dir.to_path_buf()));
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ConvertError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content, config_dir)
    }

    /// Parse config file contents
    pub fn parse(content: &str, config_dir: &Path) -> Result<Self> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConvertError::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::defaults_in(config_dir.to_path_buf());

        if let Some(defaults) = toml_value.get("defaults") {
            if let Some(options) = defaults.get("options") {
                config.default_options = string_list(options, "defaults.options")?;
            }
            if let Some(output) = defaults.get("output") {
                let name = output.as_str().ok_or_else(|| {
                    ConvertError::Config("defaults.output must be a string".to_string())
                })?;
                let format = name
                    .parse::<Format>()
                    .map_err(|e| ConvertError::Config(format!("defaults.output: {}", e)))?;
                config.default_output = Some(format);
            }
        }

        if let Some(headers) = toml_value.get("headers") {
            if let Some(whitelist) = headers.get("whitelist") {
                config.header_whitelist = string_list(whitelist, "headers.whitelist")?;
            }
            config.filter_httpie_headers = bool_setting(headers, "filter_httpie", "headers")?
                .unwrap_or(config.filter_httpie_headers);
        }

        if let Some(fields) = toml_value.get("fields") {
            config.nest_fields = bool_setting(fields, "nest", "fields")?.unwrap_or(config.nest_fields);
        }

        Ok(config)
    }

    /// Parser options derived from this config
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            header_whitelist: self.header_whitelist.clone(),
            filter_httpie_headers: self.filter_httpie_headers,
            nest_fields: self.nest_fields,
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("reqconv"))
            .unwrap_or_else(|| PathBuf::from(".reqconv"))
    }

    /// Path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

fn string_list(value: &toml::Value, name: &str) -> Result<Vec<String>> {
    let invalid = || ConvertError::Config(format!("{} must be a list of strings", name));
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(String::from).ok_or_else(invalid))
        .collect()
}

fn bool_setting(table: &toml::Value, key: &str, section: &str) -> Result<Option<bool>> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => v
            .as_bool()
            .map(Some)
            .ok_or_else(|| ConvertError::Config(format!("{}.{} must be true or false", section, key))),
    }
}
