//! Common test utilities and fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use barter_realization::common::types::{
    BrandRef, Category, ChannelTier, DailyTransactionSummary, InventoryItem, InventoryStatus,
    MediaResource, MediaStatus, SalesChannel,
};
use barter_realization::pricing::PriceSourceKind;
use barter_realization::{
    AppConfig, EngineError, InMemoryRecords, PriceSource, PriceSourceAdapter, RecordSnapshot,
    Result, TransactionAssessor, ValuationEngine,
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Fixed "today" for every fixture
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

pub fn item(id: &str, product_name: &str, category: Category) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        brand_id: "brand-top".to_string(),
        product_name: product_name.to_string(),
        category,
        quantity: 500,
        original_value: dec!(1000000),
        market_value: None,
        expiry_date: None,
        status: InventoryStatus::Pending,
    }
}

/// Snapshot covering the usual deal shapes
///
/// * `water` - well-known beverage with no catalog listing, no expiry
/// * `water-expiring` - same goods, 20 days of shelf life left
/// * `cola` - listed in both default catalogs
/// * `spa-card` - voucher-type goods from a little-known brand
pub fn sample_snapshot() -> RecordSnapshot {
    let mut expiring = item("water-expiring", "Sparkling water 330ml", Category::Beverage);
    expiring.expiry_date = Some(reference_date() + Duration::days(20));

    let mut cola = item("cola", "Coca-Cola 24 cans", Category::Beverage);
    cola.quantity = 2000;
    cola.original_value = dec!(500000);

    let mut spa = item("spa-card", "Spa beauty card, 10 visits", Category::Other);
    spa.brand_id = "brand-unknown".to_string();
    spa.quantity = 100;
    spa.original_value = dec!(200000);

    RecordSnapshot {
        inventory: vec![
            item("water", "Sparkling water 330ml", Category::Beverage),
            expiring,
            cola,
            spa,
        ],
        brands: vec![
            BrandRef {
                id: "brand-top".to_string(),
                name: "Clear Springs".to_string(),
                reputation_score: 9,
                category: Some("beverage".to_string()),
            },
            BrandRef {
                id: "brand-unknown".to_string(),
                name: "Corner Spa".to_string(),
                reputation_score: 4,
                category: None,
            },
        ],
        channels: vec![
            SalesChannel {
                id: "group-buy".to_string(),
                name: "Group buy leaders".to_string(),
                tier: ChannelTier::TopTier,
                commission_rate: dec!(5),
                settlement_terms: Some("T+7".to_string()),
            },
            SalesChannel {
                id: "micro".to_string(),
                name: "Neighbourhood resellers".to_string(),
                tier: ChannelTier::Micro,
                commission_rate: dec!(10),
                settlement_terms: None,
            },
        ],
        media: vec![MediaResource {
            id: "elevator".to_string(),
            name: "Elevator screens, 2 weeks".to_string(),
            list_price: dec!(50000),
            discount_rate: dec!(40),
            actual_cost: None,
            status: MediaStatus::Idle,
        }],
        transactions: (0..10)
            .map(|i| DailyTransactionSummary {
                date: reference_date() - Duration::days(i),
                transaction_count: 3,
                revenue: dec!(8000),
                profit: dec!(1000),
            })
            .collect(),
    }
}

pub fn sample_records() -> Arc<InMemoryRecords> {
    Arc::new(
        InMemoryRecords::from_snapshot(sample_snapshot()).with_reference_date(reference_date()),
    )
}

pub fn valuation_engine(
    records: &Arc<InMemoryRecords>,
    prices: PriceSourceAdapter,
) -> ValuationEngine {
    ValuationEngine::new(
        records.clone(),
        records.clone(),
        records.clone(),
        prices,
        AppConfig::default().valuation,
    )
    .with_reference_date(reference_date())
}

pub fn assessor(records: &Arc<InMemoryRecords>) -> TransactionAssessor {
    TransactionAssessor::new(
        records.clone(),
        records.clone(),
        records.clone(),
        records.clone(),
        AppConfig::default(),
    )
    .with_reference_date(reference_date())
}

/// Adapter backed by the built-in catalogs
pub fn catalog_prices() -> PriceSourceAdapter {
    PriceSourceAdapter::with_default_catalogs(&AppConfig::default().pricing)
}

/// Source that always fails, as an unreachable marketplace would
pub struct DownSource(pub PriceSourceKind);

#[async_trait]
impl PriceSource for DownSource {
    fn kind(&self) -> PriceSourceKind {
        self.0
    }

    async fn lookup(&self, _product_name: &str) -> Result<Option<Decimal>> {
        Err(EngineError::source_unavailable(
            self.0.to_string(),
            "connection refused",
        ))
    }
}
