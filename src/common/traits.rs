//! Collaborator interfaces the engines read from
//!
//! Storage, screens and import/export live outside this crate. The engines
//! only see these narrow traits, so any record store can be plugged in.

use super::errors::Result;
use super::types::{
    BrandRef, DailyTransactionSummary, InventoryItem, MediaResource, PendingInventory,
    SalesChannel,
};
use rust_decimal::Decimal;

/// Read/write access to inventory records
///
/// Callers must serialize writes to a single item's market value.
pub trait InventoryStore: Send + Sync {
    /// Fetch a full inventory record, `NotFound` if absent
    fn get_item(&self, id: &str) -> Result<InventoryItem>;

    /// Persist a newly derived market value
    fn set_market_value(&self, id: &str, market_value: Decimal) -> Result<()>;

    /// Count and book value of items still pending
    fn pending_inventory(&self) -> Result<PendingInventory>;
}

/// Read-only brand lookup
pub trait BrandDirectory: Send + Sync {
    fn get_brand(&self, id: &str) -> Result<BrandRef>;
}

/// Read-only sales channel lookup
pub trait ChannelDirectory: Send + Sync {
    fn get_channel(&self, id: &str) -> Result<SalesChannel>;
}

/// Read-only media resource lookup
pub trait MediaDirectory: Send + Sync {
    fn get_media(&self, id: &str) -> Result<MediaResource>;
}

/// Trailing per-day transaction aggregates
pub trait TransactionHistory: Send + Sync {
    /// Daily summaries for the last `days` days, oldest first
    ///
    /// The window ends on the reference date inclusive and holds exactly
    /// `days` calendar days, so `trailing_daily(1)` is that day alone.
    fn trailing_daily(&self, days: u32) -> Result<Vec<DailyTransactionSummary>>;
}
