use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Base name of the optional config file looked up in the working directory
/// (`composer.toml`, `composer.yaml`, `composer.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "composer";

/// Prefix of environment overrides, e.g. `COMPOSER__FORM__CPU=arm`.
pub const ENV_PREFIX: &str = "COMPOSER";

const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[composer_derive::composer_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist; without one, the optional
///    [`DEFAULT_CONFIG_NAME`] file in the working directory is used when present.
/// 2. **Environment Overrides**: variables prefixed with `COMPOSER__`, nested with double
///    underscores (`COMPOSER__LOG__LEVEL` maps to `log.level`).
///
/// Missing keys fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be parsed
/// or the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

fn load_with_env<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            info!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!("Looking for optional config '{DEFAULT_CONFIG_NAME}'");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
