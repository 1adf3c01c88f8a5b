use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Sales strategy received invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("An error occurred during calculation: {0}")]
    Calculation(String),
}
