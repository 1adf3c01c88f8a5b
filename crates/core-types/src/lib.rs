pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, RevenueStrategyId, UnknownReferencePolicy};
pub use error::CoreError;
pub use structs::{Item, Product, ProductTally, PurchaseRecord, SalesData, Seller, SellerStat};
