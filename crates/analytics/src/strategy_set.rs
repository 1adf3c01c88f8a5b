use crate::error::AnalyticsError;
use configuration::Config;
use std::fmt;
use std::sync::Arc;
use strategies::{
    create_bonus_strategy, create_revenue_strategy, BonusByProfit, BonusStrategy, RevenueStrategy,
    SimpleRevenue,
};

/// The pair of strategies an analysis runs with.
///
/// Both slots start empty. The analyzer refuses to run until both are filled.
#[derive(Clone, Default)]
pub struct AnalysisStrategies {
    revenue: Option<Arc<dyn RevenueStrategy>>,
    bonus: Option<Arc<dyn BonusStrategy>>,
}

impl AnalysisStrategies {
    /// An empty strategy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `SimpleRevenue` with the default `BonusByProfit` tiers.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue::new())
            .with_bonus(BonusByProfit::default())
    }

    /// Builds both slots through the strategy factory, as selected in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AnalyticsError> {
        let revenue = create_revenue_strategy(config.strategies.revenue, config)
            .map_err(|e| AnalyticsError::InvalidStrategy(format!("revenue '{}': {e}", config.strategies.revenue)))?;
        let bonus = create_bonus_strategy(config.strategies.bonus, config)
            .map_err(|e| AnalyticsError::InvalidStrategy(format!("bonus '{}': {e}", config.strategies.bonus)))?;
        Ok(Self {
            revenue: Some(Arc::from(revenue)),
            bonus: Some(Arc::from(bonus)),
        })
    }

    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Arc::new(strategy));
        self
    }

    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Arc::new(strategy));
        self
    }

    /// Borrows both strategies, failing if either slot is empty.
    pub(crate) fn resolve(&self) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), AnalyticsError> {
        let revenue = self
            .revenue
            .as_deref()
            .ok_or_else(|| AnalyticsError::InvalidStrategy("revenue strategy is missing".to_string()))?;
        let bonus = self
            .bonus
            .as_deref()
            .ok_or_else(|| AnalyticsError::InvalidStrategy("bonus strategy is missing".to_string()))?;
        Ok((revenue, bonus))
    }
}

impl fmt::Debug for AnalysisStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisStrategies")
            .field("revenue", &self.revenue.is_some())
            .field("bonus", &self.bonus.is_some())
            .finish()
    }
}
