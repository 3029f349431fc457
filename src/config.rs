use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub media: MediaSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Optional JSON seed file; the embedded default is used when unset
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub token_secret: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

fn default_token_ttl_secs() -> u64 {
    86_400
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSettings {
    /// Serve data-saver image variants unless a request overrides it
    #[serde(default)]
    pub low_data_mode: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with NYUMBANI_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with NYUMBANI_)
            // e.g., NYUMBANI_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NYUMBANI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NYUMBANI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment overrides
///
/// The token secret can come from the bare AUTH_TOKEN_SECRET variable in
/// addition to the prefixed form, so deployments can reuse an existing
/// secret without renaming it.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let token_secret = env::var("AUTH_TOKEN_SECRET")
        .or_else(|_| env::var("NYUMBANI_AUTH__TOKEN_SECRET"))
        .ok();

    let seed_path = env::var("NYUMBANI_CATALOG__SEED_PATH").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(secret) = token_secret {
        builder = builder.set_override("auth.token_secret", secret)?;
    }
    if let Some(path) = seed_path {
        builder = builder.set_override("catalog.seed_path", path)?;
    }

    builder.build()
}
