//! # Sales Strategy Library
//!
//! This crate holds the pluggable money rules of a sales analysis: how much
//! revenue a receipt line is worth, and how large a bonus a ranked seller earns.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. Strategies depend only on `core-types` and `configuration`.
//! - **Strategy Agnostic Analyzer:** The analyzer calls the `RevenueStrategy` and
//!   `BonusStrategy` traits and never knows which implementation it holds.
//! - **Closures Welcome:** Any plain function or closure with the right signature is
//!   a strategy, so one-off rules need no new type.
//!
//! ## Public API
//!
//! - `RevenueStrategy` / `BonusStrategy`: The two traits.
//! - `SimpleRevenue`, `CatalogPriceRevenue`, `BonusByProfit`: The built-in rules.
//! - `create_revenue_strategy` / `create_bonus_strategy`: Factories driven by config.

pub mod bonus_by_profit;
pub mod catalog_price;
pub mod error;
pub mod factory;
pub mod simple_revenue;

pub use bonus_by_profit::BonusByProfit;
pub use catalog_price::CatalogPriceRevenue;
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use simple_revenue::SimpleRevenue;

// Re-export the strategy ids from core_types
pub use core_types::{BonusStrategyId, RevenueStrategyId};

use core_types::{Item, Product, SellerStat};
use rust_decimal::Decimal;

/// Computes the revenue attributable to a single receipt line.
///
/// The `Send + Sync` bounds let one strategy set be shared by callers on
/// different threads.
pub trait RevenueStrategy: Send + Sync {
    /// # Arguments
    ///
    /// * `item` - The receipt line being priced.
    /// * `product` - The catalog entry the line's SKU resolved to.
    fn revenue(&self, item: &Item, product: &Product) -> Result<Decimal, StrategyError>;
}

/// Computes a seller's bonus from their place in the profit ranking.
pub trait BonusStrategy: Send + Sync {
    /// # Arguments
    ///
    /// * `index` - Zero-based rank after sorting by profit, highest first.
    /// * `total` - Number of ranked sellers.
    /// * `seller` - The seller's aggregated statistics.
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Result<Decimal, StrategyError>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&Item, &Product) -> Decimal + Send + Sync,
{
    fn revenue(&self, item: &Item, product: &Product) -> Result<Decimal, StrategyError> {
        Ok(self(item, product))
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal + Send + Sync,
{
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Result<Decimal, StrategyError> {
        Ok(self(index, total, seller))
    }
}

/// Prices `quantity` units at `unit_price` less a percentage discount:
/// `unit_price * quantity * (1 - discount / 100)`.
///
/// Fails instead of panicking when the result does not fit in a `Decimal`.
pub(crate) fn discounted_line_total(
    unit_price: Decimal,
    quantity: u32,
    discount: Decimal,
) -> Result<Decimal, StrategyError> {
    let overflow = || {
        StrategyError::Calculation(format!(
            "line total overflows: {unit_price} x {quantity} at {discount}% discount"
        ))
    };
    let gross = unit_price.checked_mul(Decimal::from(quantity)).ok_or_else(overflow)?;
    let factor = discount
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|d| Decimal::ONE.checked_sub(d))
        .ok_or_else(overflow)?;
    gross.checked_mul(factor).ok_or_else(overflow)
}
