use crate::error::ConfigError;
use core_types::{BonusStrategyId, RevenueStrategyId, UnknownReferencePolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The largest number of decimal places the report can be rounded to.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub strategies: Strategies,
    pub output: OutputSettings,
}

impl Config {
    /// Checks that the loaded values are logical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.top_products_limit must be greater than 0".to_string(),
            ));
        }
        if self.analysis.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationError(format!(
                "analysis.decimal_places must be at most {MAX_DECIMAL_PLACES}"
            )));
        }
        self.strategies.bonus_by_profit.validate()
    }
}

/// Parameters of the aggregation itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// How many best-selling products to list per seller.
    pub top_products_limit: usize,
    /// Decimal places that revenue, profit and bonus are rounded to.
    pub decimal_places: u32,
    pub unknown_reference: UnknownReferencePolicy,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_products_limit: 10,
            decimal_places: 2,
            unknown_reference: UnknownReferencePolicy::Fail,
        }
    }
}

/// Selects the revenue and bonus calculations and holds their parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Strategies {
    pub revenue: RevenueStrategyId,
    pub bonus: BonusStrategyId,
    pub bonus_by_profit: BonusByProfitParams,
}

/// Bonus rates, as fractions of profit, for the rank-tier bonus policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BonusByProfitParams {
    /// Rank 0.
    pub top_pct: Decimal,
    /// Ranks 1 and 2.
    pub runner_up_pct: Decimal,
    /// Every other rank except the last.
    pub default_pct: Decimal,
    /// The last rank, when there is more than one seller.
    pub last_pct: Decimal,
}

impl Default for BonusByProfitParams {
    fn default() -> Self {
        Self {
            top_pct: dec!(0.15),
            runner_up_pct: dec!(0.10),
            default_pct: dec!(0.05),
            last_pct: Decimal::ZERO,
        }
    }
}

impl BonusByProfitParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("top_pct", self.top_pct),
            ("runner_up_pct", self.runner_up_pct),
            ("default_pct", self.default_pct),
            ("last_pct", self.last_pct),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::ValidationError(format!(
                    "strategies.bonus_by_profit.{name} must be between 0 and 1, got {rate}"
                )));
            }
        }
        Ok(())
    }
}

/// How the CLI presents the finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}
