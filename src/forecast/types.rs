use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::types::{DailyTransactionSummary, PendingInventory};

/// Aggregates a forecast is projected from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    /// Trailing daily summaries, one per day with activity
    pub history: Vec<DailyTransactionSummary>,
    pub pending: PendingInventory,
}

/// Projection for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodForecast {
    /// 1-based period number
    pub period: u32,
    pub predicted_profit: Decimal,
    pub predicted_transactions: u64,
    /// Share of pending inventory value expected to convert in this period
    pub inventory_conversion: Decimal,
    pub cumulative_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub periods: u32,
    /// Average daily profit scaled to one period
    pub historical_avg_profit: Decimal,
    pub pending_inventory_value: Decimal,
    pub forecast: Vec<PeriodForecast>,
    pub total_predicted_profit: Decimal,
}
