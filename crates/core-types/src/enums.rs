use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which revenue calculation the factory should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategyId {
    /// `sale_price * quantity * (1 - discount / 100)` from the receipt line.
    #[default]
    Simple,
    /// Same discount rule, but priced from the product catalog when it carries a price.
    CatalogPrice,
}

/// Identifies which bonus calculation the factory should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategyId {
    #[default]
    ByProfit,
}

/// What the analyzer does with a purchase record or item that points at an
/// unknown seller or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownReferencePolicy {
    /// Abort the analysis with an error naming the missing key.
    #[default]
    Fail,
    /// Log a warning and leave the offending record or item out.
    Skip,
}

impl fmt::Display for RevenueStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueStrategyId::Simple => write!(f, "simple"),
            RevenueStrategyId::CatalogPrice => write!(f, "catalog_price"),
        }
    }
}

impl fmt::Display for BonusStrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusStrategyId::ByProfit => write!(f, "by_profit"),
        }
    }
}
