//! Configuration management for restmenu.
//!
//! Parses `restmenu.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `server.host` and `menus.source` support `${VAR}` (error if unset) and
//! `${VAR:-default}`.
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "${RESTMENU_HOST:-127.0.0.1}"
//! port = 7980
//!
//! [menus]
//! source = "menus.yaml"
//!
//! [api]
//! prefix = "/entity/restmenu"
//! cache_max_age = 60
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override menu definitions file.
    pub menus_source: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "restmenu.toml";

/// Default menu definitions filename.
const DEFAULT_MENUS_SOURCE: &str = "menus.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Menu source configuration (path as written in TOML).
    menus: MenusConfigRaw,
    /// API configuration.
    pub api: ApiConfig,

    /// Resolved menu source configuration (set after loading).
    #[serde(skip)]
    pub menus_resolved: MenusConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct MenusConfigRaw {
    source: Option<String>,
}

/// Resolved menu source configuration.
#[derive(Debug, Default)]
pub struct MenusConfig {
    /// Absolute path of the YAML menu definitions.
    pub source: PathBuf,
}

/// JSON API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Route prefix; menus are served at `{prefix}/{menu}`.
    pub prefix: String,
    /// `Cache-Control` max-age in seconds.
    pub cache_max_age: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/entity/restmenu".to_owned(),
            cache_max_age: 60,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`RESTMENU_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `restmenu.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source) = &settings.menus_source {
            self.menus_resolved.source.clone_from(source);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            menus: MenusConfigRaw::default(),
            api: ApiConfig::default(),
            menus_resolved: MenusConfig {
                source: base.join(DEFAULT_MENUS_SOURCE),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_api()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_api(&self) -> Result<(), ConfigError> {
        let prefix = &self.api.prefix;
        require_non_empty(prefix, "api.prefix")?;

        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "api.prefix must start with /".to_owned(),
            ));
        }
        if prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "api.prefix must not end with /".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref source) = self.menus.source {
            self.menus.source = Some(expand::expand_env(source, "menus.source")?);
        }

        Ok(())
    }

    /// Resolve the menu source relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source = self.menus.source.as_deref().unwrap_or(DEFAULT_MENUS_SOURCE);
        self.menus_resolved = MenusConfig {
            source: config_dir.join(source),
        };
    }
}
