use crate::bonus_by_profit::BonusByProfit;
use crate::catalog_price::CatalogPriceRevenue;
use crate::error::StrategyError;
use crate::simple_revenue::SimpleRevenue;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::Config;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the revenue strategy named by `id`.
pub fn create_revenue_strategy(
    id: RevenueStrategyId,
    _config: &Config,
) -> Result<Box<dyn RevenueStrategy>, StrategyError> {
    // The compiler will error if a new RevenueStrategyId is added but not handled here.
    match id {
        RevenueStrategyId::Simple => Ok(Box::new(SimpleRevenue::new())),
        RevenueStrategyId::CatalogPrice => Ok(Box::new(CatalogPriceRevenue::new())),
    }
}

/// Creates the bonus strategy named by `id`, configured from `config`.
pub fn create_bonus_strategy(
    id: BonusStrategyId,
    config: &Config,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    match id {
        BonusStrategyId::ByProfit => {
            let params = config.strategies.bonus_by_profit.clone();
            Ok(Box::new(BonusByProfit::new(params)?))
        }
    }
}
