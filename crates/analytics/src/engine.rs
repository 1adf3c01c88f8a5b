use crate::error::AnalyticsError;
use crate::report::{top_products, SellerReport};
use crate::strategy_set::AnalysisStrategies;
use configuration::{AnalysisSettings, Config};
use core_types::{Product, PurchaseRecord, SalesData, SellerStat, UnknownReferencePolicy};
use rust_decimal::Decimal;
use std::collections::HashMap;
use strategies::RevenueStrategy;

/// A stateless calculator that ranks sellers by the profit they generated.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    settings: AnalysisSettings,
}

/// Analyzes `data` with the default settings.
pub fn analyze(data: &SalesData, strategies: &AnalysisStrategies) -> Result<Vec<SellerReport>, AnalyticsError> {
    SalesAnalyzer::default().analyze(data, strategies)
}

impl SalesAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.analysis.clone())
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// The main entry point for building the seller report.
    ///
    /// # Arguments
    ///
    /// * `data` - Sellers, products and purchase records. All three must be non-empty.
    /// * `strategies` - The revenue and bonus rules. Both slots must be filled.
    ///
    /// # Returns
    ///
    /// One `SellerReport` per input seller, ordered by profit from highest to
    /// lowest. Sellers with equal profit keep their input order.
    pub fn analyze(
        &self,
        data: &SalesData,
        strategies: &AnalysisStrategies,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        validate_input(data)?;
        let (revenue_strategy, bonus_strategy) = strategies.resolve()?;

        tracing::info!(
            sellers = data.sellers.len(),
            products = data.products.len(),
            purchase_records = data.purchase_records.len(),
            "Starting sales analysis"
        );

        let mut stats: Vec<SellerStat> = data.sellers.iter().map(SellerStat::new).collect();

        // Call-scoped lookup indices. A duplicated key resolves to its last occurrence.
        let product_index: HashMap<&str, &Product> =
            data.products.iter().map(|p| (p.sku.as_str(), p)).collect();
        let seller_index: HashMap<String, usize> = stats
            .iter()
            .enumerate()
            .map(|(pos, stat)| (stat.id.clone(), pos))
            .collect();

        for record in &data.purchase_records {
            let Some(&pos) = seller_index.get(record.seller_id.as_str()) else {
                self.unknown_seller(record)?;
                continue;
            };
            self.accumulate(&mut stats[pos], record, &product_index, revenue_strategy)?;
        }

        // --- Ranking ---
        // `sort_by` is stable, so equal profits keep input order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        let mut reports = Vec::with_capacity(total);
        for (index, stat) in stats.into_iter().enumerate() {
            let bonus = bonus_strategy.bonus(index, total, &stat)?;
            let top = top_products(&stat.products_sold, self.settings.top_products_limit);
            tracing::debug!(
                rank = index,
                seller = %stat.id,
                profit = %stat.profit,
                %bonus,
                "Seller ranked"
            );
            reports.push(SellerReport::from_stat(stat, bonus, top, self.settings.decimal_places));
        }

        Ok(reports)
    }

    /// Adds one purchase record to its seller's running totals.
    fn accumulate(
        &self,
        stat: &mut SellerStat,
        record: &PurchaseRecord,
        product_index: &HashMap<&str, &Product>,
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<(), AnalyticsError> {
        stat.sales_count += 1;
        stat.revenue = stat
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| overflow("revenue", &stat.id))?;

        for item in &record.items {
            let Some(product) = product_index.get(item.sku.as_str()) else {
                match self.settings.unknown_reference {
                    UnknownReferencePolicy::Fail => {
                        return Err(AnalyticsError::UnknownProduct(item.sku.clone()));
                    }
                    UnknownReferencePolicy::Skip => {
                        tracing::warn!(
                            sku = %item.sku,
                            seller = %record.seller_id,
                            receipt = record.receipt_id.as_deref().unwrap_or("-"),
                            "Skipping item with unknown product"
                        );
                        continue;
                    }
                }
            };

            let item_revenue = revenue_strategy.revenue(item, product)?;
            let item_profit = product
                .purchase_price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|cost| item_revenue.checked_sub(cost))
                .ok_or_else(|| overflow("item profit", &stat.id))?;
            stat.profit = stat
                .profit
                .checked_add(item_profit)
                .ok_or_else(|| overflow("profit", &stat.id))?;
            stat.products_sold.add(&item.sku, item.quantity);
        }

        Ok(())
    }

    fn unknown_seller(&self, record: &PurchaseRecord) -> Result<(), AnalyticsError> {
        match self.settings.unknown_reference {
            UnknownReferencePolicy::Fail => Err(AnalyticsError::UnknownSeller(record.seller_id.clone())),
            UnknownReferencePolicy::Skip => {
                tracing::warn!(
                    seller = %record.seller_id,
                    receipt = record.receipt_id.as_deref().unwrap_or("-"),
                    "Skipping purchase record with unknown seller"
                );
                Ok(())
            }
        }
    }
}

fn overflow(metric: &str, seller_id: &str) -> AnalyticsError {
    AnalyticsError::Calculation(format!("{metric} of seller '{seller_id}' overflows a decimal"))
}

/// Rejects datasets with an empty collection before any processing starts.
fn validate_input(data: &SalesData) -> Result<(), AnalyticsError> {
    let collections = [
        ("sellers", data.sellers.is_empty()),
        ("products", data.products.is_empty()),
        ("purchase_records", data.purchase_records.is_empty()),
    ];
    for (name, is_empty) in collections {
        if is_empty {
            return Err(AnalyticsError::InvalidInput(format!("`{name}` must be a non-empty list")));
        }
    }
    Ok(())
}
