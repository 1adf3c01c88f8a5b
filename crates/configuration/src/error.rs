use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read sales report settings: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid sales report setting: {0}")]
    ValidationError(String),
}
