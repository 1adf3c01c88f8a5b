use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::BonusByProfitParams;
use core_types::SellerStat;
use rust_decimal::Decimal;

/// Rank-tier bonus: a fixed fraction of the seller's profit chosen by rank.
///
/// | Rank               | Rate            |
/// |--------------------|-----------------|
/// | 0                  | `top_pct`       |
/// | 1 or 2             | `runner_up_pct` |
/// | last (`total - 1`) | `last_pct`      |
/// | anything else      | `default_pct`   |
///
/// The rows are checked top to bottom and the first match wins, so a sole
/// seller is paid as the top performer even though it is also last.
#[derive(Debug, Clone)]
pub struct BonusByProfit {
    params: BonusByProfitParams,
}

impl BonusByProfit {
    /// Creates a new `BonusByProfit` with the given rates.
    ///
    /// Every rate must lie between 0 and 1.
    pub fn new(params: BonusByProfitParams) -> Result<Self, StrategyError> {
        params
            .validate()
            .map_err(|e| StrategyError::InvalidParameters(e.to_string()))?;
        Ok(Self { params })
    }

    fn rate_for(&self, index: usize, total: usize) -> Decimal {
        if index == 0 {
            self.params.top_pct
        } else if index == 1 || index == 2 {
            self.params.runner_up_pct
        } else if index == total - 1 {
            self.params.last_pct
        } else {
            self.params.default_pct
        }
    }
}

impl Default for BonusByProfit {
    fn default() -> Self {
        Self {
            params: BonusByProfitParams::default(),
        }
    }
}

impl BonusStrategy for BonusByProfit {
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Result<Decimal, StrategyError> {
        if index >= total {
            return Err(StrategyError::InvalidParameters(format!(
                "rank {index} is out of range for {total} sellers"
            )));
        }
        let rate = self.rate_for(index, total);
        tracing::trace!(seller = %seller.id, index, total, %rate, "BonusByProfit: rate selected");
        seller.profit.checked_mul(rate).ok_or_else(|| {
            StrategyError::Calculation(format!("bonus for seller '{}' overflows", seller.id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seller(profit: Decimal) -> SellerStat {
        SellerStat {
            id: "seller_1".to_string(),
            name: "Alexey Petrov".to_string(),
            revenue: Decimal::ZERO,
            profit,
            sales_count: 0,
            products_sold: Default::default(),
        }
    }

    #[test]
    fn test_tiers_for_five_sellers() {
        let strategy = BonusByProfit::default();
        let stat = seller(dec!(1000));
        let bonuses: Vec<Decimal> = (0..5).map(|i| strategy.bonus(i, 5, &stat).unwrap()).collect();
        assert_eq!(bonuses, vec![dec!(150), dec!(100), dec!(100), dec!(50), Decimal::ZERO]);
    }

    #[test]
    fn test_sole_seller_gets_top_rate() {
        let bonus = BonusByProfit::default().bonus(0, 1, &seller(dec!(200))).unwrap();
        assert_eq!(bonus, dec!(30));
    }

    #[test]
    fn test_runner_up_wins_over_last_place() {
        // With two or three sellers the last one is also a runner-up.
        let strategy = BonusByProfit::default();
        assert_eq!(strategy.bonus(1, 2, &seller(dec!(100))).unwrap(), dec!(10));
        assert_eq!(strategy.bonus(2, 3, &seller(dec!(100))).unwrap(), dec!(10));
    }

    #[test]
    fn test_negative_profit_gives_negative_bonus() {
        let bonus = BonusByProfit::default().bonus(3, 10, &seller(dec!(-40))).unwrap();
        assert_eq!(bonus, dec!(-2));
    }

    #[test]
    fn test_custom_rates() {
        let strategy = BonusByProfit::new(BonusByProfitParams {
            top_pct: dec!(0.5),
            runner_up_pct: dec!(0.25),
            default_pct: dec!(0.1),
            last_pct: dec!(0.01),
        })
        .unwrap();
        assert_eq!(strategy.bonus(0, 5, &seller(dec!(100))).unwrap(), dec!(50));
        assert_eq!(strategy.bonus(4, 5, &seller(dec!(100))).unwrap(), dec!(1));
    }

    #[test]
    fn test_invalid_rates_are_rejected() {
        let params = BonusByProfitParams {
            top_pct: dec!(2),
            ..Default::default()
        };
        assert!(matches!(BonusByProfit::new(params), Err(StrategyError::InvalidParameters(_))));
    }

    #[test]
    fn test_rank_out_of_range() {
        let err = BonusByProfit::default().bonus(2, 2, &seller(dec!(1))).unwrap_err();
        assert!(matches!(err, StrategyError::InvalidParameters(_)));
    }
}
