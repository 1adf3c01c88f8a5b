use crate::error::StrategyError;
use crate::{discounted_line_total, RevenueStrategy};
use core_types::{Item, Product};
use rust_decimal::Decimal;

/// Prices a receipt line from its own sale price: `sale_price * quantity * (1 - discount / 100)`.
///
/// The product is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &Item, _product: &Product) -> Result<Decimal, StrategyError> {
        discounted_line_total(item.sale_price, item.quantity, item.discount)
    }
}
