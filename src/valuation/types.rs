use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::adjustments::RateBreakdown;
use crate::common::types::RiskLevel;
use crate::pricing::PriceQuote;

/// Which derivation produced the expected cash return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnBasis {
    /// Quantity times the recommended resale price
    RecommendedPrice,
    /// Book value times the adjusted realization rate
    RateModel,
    /// Book value times the band limit the price-implied rate was clamped to;
    /// the recommended price alone would return a different amount
    ClampedRate,
}

/// Outcome of valuing one inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub inventory_id: String,
    pub product_name: String,
    pub original_value: Decimal,
    /// Value written back onto the inventory record
    pub market_value: Decimal,
    /// Always inside the configured band
    pub realization_rate: Decimal,
    /// Per-unit resale price, absent without reference prices
    pub recommended_sale_price: Option<Decimal>,
    pub expected_cash_return: Decimal,
    pub basis: ReturnBasis,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    /// How the rate model arrived at its rate
    pub rate_breakdown: RateBreakdown,
    /// Reference prices and any degraded sources
    pub price_sources: PriceQuote,
    pub valued_on: NaiveDate,
}

impl ValuationResult {
    /// True when a price source failed and the result rests on less evidence
    pub fn is_degraded(&self) -> bool {
        self.price_sources.is_degraded()
    }
}
