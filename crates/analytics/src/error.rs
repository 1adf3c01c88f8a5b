use strategies::StrategyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Invalid strategy configuration: {0}")]
    InvalidStrategy(String),

    #[error("Purchase record references unknown seller '{0}'")]
    UnknownSeller(String),

    #[error("Purchase item references unknown product '{0}'")]
    UnknownProduct(String),

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("Strategy failed during analysis: {0}")]
    Strategy(#[from] StrategyError),
}
