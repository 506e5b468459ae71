//! Configuration management for pagemap.
//!
//! Parses `pagemap.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `contentful.base_url`
//! - `contentful.space_id`
//! - `contentful.environment`
//! - `contentful.access_token`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

use expand::expand_field;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override routing snapshot path.
    pub snapshot_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagemap.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Routing configuration (paths are relative strings from TOML).
    #[serde(default)]
    routing: RoutingConfigRaw,
    /// Contentful configuration.
    pub contentful: Option<ContentfulConfig>,

    /// Resolved routing configuration (set after loading).
    #[serde(skip)]
    pub routing_resolved: RoutingConfig,
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
            port: 7070,
        }
    }
}

/// Raw routing configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RoutingConfigRaw {
    snapshot_path: Option<String>,
}

/// Resolved routing configuration with absolute paths.
#[derive(Debug, Default)]
pub struct RoutingConfig {
    /// Project directory for pagemap data (.pagemap/).
    pub project_dir: PathBuf,
    /// Path of the routing snapshot artifact.
    pub snapshot_path: PathBuf,
}

/// Contentful configuration.
#[derive(Debug, Deserialize)]
pub struct ContentfulConfig {
    /// GraphQL API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Contentful space id.
    pub space_id: String,
    /// Contentful environment.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Content Delivery API access token.
    pub access_token: String,
}

impl ContentfulConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "contentful.base_url")?;
        require_http_url(&self.base_url, "contentful.base_url")?;
        require_non_empty(&self.space_id, "contentful.space_id")?;
        require_non_empty(&self.environment, "contentful.environment")?;
        require_non_empty(&self.access_token, "contentful.access_token")?;
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://graphql.contentful.com".to_owned()
}

fn default_environment() -> String {
    "master".to_owned()
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
        /// Config field path (e.g., "`contentful.access_token`").
        field: String,
        /// Error message (e.g., "${`CONTENTFUL_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagemap.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(snapshot_path) = &settings.snapshot_path {
            self.routing_resolved.snapshot_path.clone_from(snapshot_path);
        }
    }

    /// Get validated Contentful configuration.
    ///
    /// Returns the Contentful config if the `[contentful]` section is present
    /// and all fields are valid. Use this instead of accessing the `contentful`
    /// field directly when the command requires the content store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_contentful(&self) -> Result<&ContentfulConfig, ConfigError> {
        let contentful = self.contentful.as_ref().ok_or_else(|| {
            ConfigError::Validation("[contentful] section required in config".into())
        })?;
        contentful.validate()?;
        Ok(contentful)
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let project_dir = base.join(".pagemap");
        Self {
            server: ServerConfig::default(),
            routing: RoutingConfigRaw::default(),
            contentful: None,
            routing_resolved: RoutingConfig {
                snapshot_path: project_dir.join("routing-cache.json"),
                project_dir,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variables in string fields.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand_field(&mut self.server.host, "server.host")?;
        if let Some(contentful) = &mut self.contentful {
            expand_field(&mut contentful.base_url, "contentful.base_url")?;
            expand_field(&mut contentful.space_id, "contentful.space_id")?;
            expand_field(&mut contentful.environment, "contentful.environment")?;
            expand_field(&mut contentful.access_token, "contentful.access_token")?;
        }
        Ok(())
    }

    /// Resolve raw path strings against the config file directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let project_dir = config_dir.join(".pagemap");

        let snapshot_path = match &self.routing.snapshot_path {
            Some(raw) => {
                let expanded = shellexpand::tilde(raw);
                let path = PathBuf::from(expanded.as_ref());
                if path.is_absolute() {
                    path
                } else {
                    config_dir.join(path)
                }
            }
            None => project_dir.join("routing-cache.json"),
        };

        self.routing_resolved = RoutingConfig {
            project_dir,
            snapshot_path,
        };
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if let Some(contentful) = &self.contentful {
            contentful.validate()?;
        }
        Ok(())
    }
}
