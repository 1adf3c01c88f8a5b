use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisSettings, BonusByProfitParams, Config, OutputFormat, OutputSettings, Strategies};

/// Prefix of the environment variables that override file settings,
/// e.g. `SALES__ANALYSIS__TOP_PRODUCTS_LIMIT=5`.
pub const ENV_PREFIX: &str = "SALES";

/// Loads the application configuration from `path` and the environment.
///
/// The file is optional: every field has a built-in default, so a missing
/// file yields `Config::default()` plus any environment overrides. The
/// merged result is validated before it is returned.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), ?config, "Configuration loaded");
    Ok(config)
}

/// Parses and validates a configuration held in a TOML string.
pub fn config_from_toml(toml: &str) -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
