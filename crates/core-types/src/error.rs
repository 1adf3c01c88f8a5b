use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to parse sales dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
