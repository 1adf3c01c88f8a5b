use crate::error::StrategyError;
use crate::{discounted_line_total, RevenueStrategy};
use core_types::{Item, Product};
use rust_decimal::Decimal;

/// Prices a receipt line from the catalog's list price, falling back to the
/// line's own sale price for products without one. The line discount still applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPriceRevenue;

impl CatalogPriceRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for CatalogPriceRevenue {
    fn revenue(&self, item: &Item, product: &Product) -> Result<Decimal, StrategyError> {
        let unit_price = product.sale_price.unwrap_or(item.sale_price);
        discounted_line_total(unit_price, item.quantity, item.discount)
    }
}
