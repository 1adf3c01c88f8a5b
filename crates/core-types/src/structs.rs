use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A member of the sales team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub position: Option<String>,
}

impl Seller {
    /// The name shown in reports: first and last name separated by a space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog entry, keyed by its SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// What the business paid per unit.
    pub purchase_price: Decimal,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Catalog (list) price per unit, when the catalog carries one.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
}

/// A single line of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: Decimal,
    /// Discount in percent, nominally 0..=100. Not range-checked.
    #[serde(default)]
    pub discount: Decimal,
}

/// One receipt issued by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub receipt_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub total_discount: Option<Decimal>,
}

/// The complete, already-loaded input of a sales analysis.
///
/// Missing collections deserialize as empty so that the analyzer, not the
/// parser, is the one to reject them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    const COLLECTIONS: [&'static str; 3] = ["sellers", "products", "purchase_records"];

    /// Parses a dataset from its JSON representation.
    ///
    /// A missing (`null`) dataset, or a collection that is present but not a
    /// list, is reported as invalid input rather than as a parse error.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let Some(fields) = value.as_object() else {
            let reason = if value.is_null() { "dataset is missing" } else { "dataset must be an object" };
            return Err(CoreError::InvalidInput("data".to_string(), reason.to_string()));
        };
        for name in Self::COLLECTIONS {
            if fields.get(name).is_some_and(|field| !field.is_array()) {
                return Err(CoreError::InvalidInput(name.to_string(), "must be a list".to_string()));
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Cumulative quantity sold per SKU, remembering the order in which each SKU
/// was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductTally {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` to the running total for `sku`, starting it at zero on first sight.
    pub fn add(&mut self, sku: &str, quantity: u32) {
        match self.positions.get(sku) {
            Some(&pos) => self.entries[pos].1 += u64::from(quantity),
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), u64::from(quantity)));
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&pos| self.entries[pos].1)
    }

    /// Iterates `(sku, quantity)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running per-seller statistics built up during an analysis.
///
/// Bonus strategies receive this after aggregation and before any bonus is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u32,
    pub products_sold: ProductTally,
}

impl SellerStat {
    /// Creates a zeroed accumulator for the given seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }
}
