//! Barter Realization
//!
//! Valuation and feasibility engines for goods received in exchange for
//! advertising. Goods are priced against reference sources, turned into an
//! expected cash return, and each proposed resale deal is costed, risk scored
//! and given a go/no-go. A profit projector extrapolates recent activity.

pub mod assessment;
pub mod common;
pub mod config;
pub mod forecast;
pub mod pricing;
pub mod valuation;

// Re-export commonly used types
pub use common::errors::{EngineError, Result};
pub use common::memory::{InMemoryRecords, RecordSnapshot};
pub use common::traits::{
    BrandDirectory, ChannelDirectory, InventoryStore, MediaDirectory, TransactionHistory,
};
pub use common::types::{
    BrandRef, Category, ChannelTier, DailyTransactionSummary, InventoryItem, InventoryStatus,
    MediaResource, MediaStatus, PendingInventory, RiskLevel, SalesChannel,
};
pub use config::types::AppConfig;

// Engines
pub use assessment::{ComplianceReport, TransactionAssessment, TransactionAssessor};
pub use forecast::{ForecastResult, ProfitForecaster};
pub use pricing::{CatalogPriceSource, PriceQuote, PriceSource, PriceSourceAdapter};
pub use valuation::{ValuationEngine, ValuationResult, ValuationSummary};
