//! In-memory record store
//!
//! Implements every collaborator trait over plain maps. The CLI loads it from
//! a JSON snapshot; tests build it from fixtures.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use super::errors::{EngineError, Result};
use super::traits::{
    BrandDirectory, ChannelDirectory, InventoryStore, MediaDirectory, TransactionHistory,
};
use super::types::{
    BrandRef, DailyTransactionSummary, InventoryItem, InventoryStatus, MediaResource,
    PendingInventory, SalesChannel,
};

/// Serializable dump of every record the engines may read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub brands: Vec<BrandRef>,
    #[serde(default)]
    pub channels: Vec<SalesChannel>,
    #[serde(default)]
    pub media: Vec<MediaResource>,
    #[serde(default)]
    pub transactions: Vec<DailyTransactionSummary>,
}

/// Map-backed implementation of the collaborator traits
pub struct InMemoryRecords {
    inventory: RwLock<HashMap<String, InventoryItem>>,
    brands: HashMap<String, BrandRef>,
    channels: HashMap<String, SalesChannel>,
    media: HashMap<String, MediaResource>,
    transactions: Vec<DailyTransactionSummary>,
    /// Day the trailing history window ends on
    as_of: NaiveDate,
}

impl InMemoryRecords {
    pub fn new() -> Self {
        Self::from_snapshot(RecordSnapshot::default())
    }

    pub fn from_snapshot(snapshot: RecordSnapshot) -> Self {
        let mut transactions = snapshot.transactions;
        transactions.sort_by_key(|day| day.date);

        Self {
            inventory: RwLock::new(
                snapshot
                    .inventory
                    .into_iter()
                    .map(|item| (item.id.clone(), item))
                    .collect(),
            ),
            brands: snapshot
                .brands
                .into_iter()
                .map(|brand| (brand.id.clone(), brand))
                .collect(),
            channels: snapshot
                .channels
                .into_iter()
                .map(|channel| (channel.id.clone(), channel))
                .collect(),
            media: snapshot
                .media
                .into_iter()
                .map(|media| (media.id.clone(), media))
                .collect(),
            transactions,
            as_of: Utc::now().date_naive(),
        }
    }

    /// Load a JSON snapshot from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: RecordSnapshot = serde_json::from_str(&raw)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Pin the end of the history window (defaults to today)
    pub fn with_reference_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn insert_item(&self, item: InventoryItem) -> Result<()> {
        self.inventory
            .write()
            .map_err(|e| EngineError::Internal(e.to_string()))?
            .insert(item.id.clone(), item);
        Ok(())
    }

    pub fn inventory_len(&self) -> usize {
        self.inventory.read().map(|items| items.len()).unwrap_or(0)
    }
}

impl Default for InMemoryRecords {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore for InMemoryRecords {
    fn get_item(&self, id: &str) -> Result<InventoryItem> {
        self.inventory
            .read()
            .map_err(|e| EngineError::Internal(e.to_string()))?
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("inventory item", id))
    }

    fn set_market_value(&self, id: &str, market_value: Decimal) -> Result<()> {
        let mut items = self
            .inventory
            .write()
            .map_err(|e| EngineError::Internal(e.to_string()))?;
        let item = items
            .get_mut(id)
            .ok_or_else(|| EngineError::not_found("inventory item", id))?;
        item.market_value = Some(market_value);
        Ok(())
    }

    fn pending_inventory(&self) -> Result<PendingInventory> {
        let items = self
            .inventory
            .read()
            .map_err(|e| EngineError::Internal(e.to_string()))?;

        Ok(items
            .values()
            .filter(|item| item.status == InventoryStatus::Pending)
            .fold(PendingInventory::default(), |mut acc, item| {
                acc.item_count += 1;
                acc.total_value += item.original_value;
                acc
            }))
    }
}

impl BrandDirectory for InMemoryRecords {
    fn get_brand(&self, id: &str) -> Result<BrandRef> {
        self.brands
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("brand", id))
    }
}

impl ChannelDirectory for InMemoryRecords {
    fn get_channel(&self, id: &str) -> Result<SalesChannel> {
        self.channels
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("sales channel", id))
    }
}

impl MediaDirectory for InMemoryRecords {
    fn get_media(&self, id: &str) -> Result<MediaResource> {
        self.media
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("media resource", id))
    }
}

impl TransactionHistory for InMemoryRecords {
    fn trailing_daily(&self, days: u32) -> Result<Vec<DailyTransactionSummary>> {
        // exclusive lower bound: `days` calendar days ending on as_of
        let window_start = self.as_of - Duration::days(i64::from(days));
        Ok(self
            .transactions
            .iter()
            .filter(|day| day.date > window_start && day.date <= self.as_of)
            .cloned()
            .collect())
    }
}
