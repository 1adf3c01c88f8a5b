use core_types::{ProductTally, SellerStat};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One line of the finished sales report.
///
/// Money fields are rounded half away from zero to the configured number of
/// decimal places and serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u32,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

/// A product and the total quantity a seller sold of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

impl SellerReport {
    /// Projects a ranked accumulator into its output record.
    pub fn from_stat(stat: SellerStat, bonus: Decimal, top_products: Vec<TopProduct>, decimal_places: u32) -> Self {
        Self {
            seller_id: stat.id,
            name: stat.name,
            revenue: round_money(stat.revenue, decimal_places),
            profit: round_money(stat.profit, decimal_places),
            sales_count: stat.sales_count,
            top_products,
            bonus: round_money(bonus, decimal_places),
        }
    }
}

/// Rounds half away from zero, so `0.125` becomes `0.13` and `-0.125` becomes `-0.13`.
pub fn round_money(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// The `limit` best-selling products, highest quantity first.
///
/// Equal quantities keep the order in which the products were first sold.
pub fn top_products(tally: &ProductTally, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = tally
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.to_string(),
            quantity,
        })
        .collect();
    // `sort_by` is stable, which is what keeps ties in first-seen order.
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}
