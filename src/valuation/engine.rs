use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::adjustments::{RateContext, RealizationRateModel};
use super::price_risk::rate_price_risk;
use super::types::{ReturnBasis, ValuationResult};
use crate::common::errors::Result;
use crate::common::traits::{BrandDirectory, ChannelDirectory, InventoryStore};
use crate::common::types::{round_money, round_ratio, InventoryItem};
use crate::config::types::ValuationParams;
use crate::pricing::{PriceQuote, PriceSourceAdapter};

/// Realization Valuation Engine
///
/// Turns an item's book value into a market-grounded cash value and a
/// recommended resale price. The only side effect is writing the derived
/// market value back through [`InventoryStore::set_market_value`].
pub struct ValuationEngine {
    inventory: Arc<dyn InventoryStore>,
    brands: Arc<dyn BrandDirectory>,
    channels: Arc<dyn ChannelDirectory>,
    prices: PriceSourceAdapter,
    rate_model: RealizationRateModel,
    /// Fixed valuation date; today when unset
    reference_date: Option<NaiveDate>,
}

impl ValuationEngine {
    pub fn new(
        inventory: Arc<dyn InventoryStore>,
        brands: Arc<dyn BrandDirectory>,
        channels: Arc<dyn ChannelDirectory>,
        prices: PriceSourceAdapter,
        params: ValuationParams,
    ) -> Self {
        Self {
            inventory,
            brands,
            channels,
            prices,
            rate_model: RealizationRateModel::new(params),
            reference_date: None,
        }
    }

    /// Replace the adjustment chain
    pub fn with_rate_model(mut self, rate_model: RealizationRateModel) -> Self {
        self.rate_model = rate_model;
        self
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn rate_model(&self) -> &RealizationRateModel {
        &self.rate_model
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Value an item with no particular resale channel in mind
    pub async fn valuate(&self, inventory_id: &str) -> Result<ValuationResult> {
        self.valuate_for_channel(inventory_id, None).await
    }

    /// Value an item as if resold through `channel_id`
    #[instrument(skip(self))]
    pub async fn valuate_for_channel(
        &self,
        inventory_id: &str,
        channel_id: Option<&str>,
    ) -> Result<ValuationResult> {
        let item = self.inventory.get_item(inventory_id)?;
        item.validate()?;
        let brand = self.brands.get_brand(&item.brand_id)?;
        brand.validate()?;
        let channel = channel_id
            .map(|id| self.channels.get_channel(id))
            .transpose()?;
        if let Some(channel) = &channel {
            channel.validate()?;
        }

        let today = self.today();
        let months_until_expiry = item.months_until_expiry(today);
        let quote = self.prices.lookup(&item.product_name).await;
        if quote.is_degraded() {
            warn!(
                unavailable = ?quote.unavailable,
                "Valuing with degraded price sources"
            );
        }

        let params = self.rate_model.params();
        let market_value = quote
            .lower()
            .unwrap_or(item.original_value * params.fallback_market_ratio);
        let recommended = recommended_price(&quote, params);

        let breakdown = self.rate_model.compose(&RateContext {
            category: item.category,
            reputation_score: brand.reputation_score,
            channel_tier: channel.as_ref().map(|c| c.tier),
            months_until_expiry,
        });

        let (rate, expected_return, basis) = match recommended {
            Some(price) if item.original_value > Decimal::ZERO => {
                self.price_driven_return(&item, price)
            }
            _ => (
                breakdown.rate,
                item.original_value * breakdown.rate,
                ReturnBasis::RateModel,
            ),
        };

        let risk = rate_price_risk(brand.reputation_score, months_until_expiry, &quote);
        let market_value = round_money(market_value);
        self.inventory.set_market_value(&item.id, market_value)?;

        info!(
            %market_value,
            realization_rate = %rate,
            expected_return = %expected_return,
            risk = %risk.level,
            "Valuation complete"
        );

        Ok(ValuationResult {
            inventory_id: item.id,
            product_name: item.product_name,
            original_value: item.original_value,
            market_value,
            realization_rate: round_ratio(rate),
            recommended_sale_price: recommended.map(round_money),
            expected_cash_return: round_money(expected_return),
            basis,
            risk_level: risk.level,
            risk_score: risk.score,
            rate_breakdown: breakdown,
            price_sources: quote,
            valued_on: today,
        })
    }

    /// Return from reselling every unit at the recommended price
    ///
    /// The implied rate is clamped into the band; when clamping moves it the
    /// return follows the clamped rate and the basis says so.
    fn price_driven_return(
        &self,
        item: &InventoryItem,
        price: Decimal,
    ) -> (Decimal, Decimal, ReturnBasis) {
        let gross = Decimal::from(item.quantity) * price;
        let implied_rate = gross / item.original_value;
        let rate = self.rate_model.clamp(implied_rate);
        if rate == implied_rate {
            (rate, gross, ReturnBasis::RecommendedPrice)
        } else {
            debug!(%implied_rate, %rate, "Price-implied rate clamped into band");
            (rate, item.original_value * rate, ReturnBasis::ClampedRate)
        }
    }

    /// Value several items one after another
    ///
    /// Each entry carries its own error; one failure does not stop the rest.
    /// Pacing between calls is left to the caller.
    pub async fn batch_valuate(&self, inventory_ids: &[String]) -> Vec<Result<ValuationResult>> {
        let mut results = Vec::with_capacity(inventory_ids.len());
        for id in inventory_ids {
            let result = self.valuate(id).await;
            if let Err(e) = &result {
                warn!(inventory_id = %id, error = %e, "Valuation failed");
            }
            results.push(result);
        }
        results
    }
}

/// 60% of the second-hand (or cheaper) price, else 50% of retail
fn recommended_price(quote: &PriceQuote, params: &ValuationParams) -> Option<Decimal> {
    let floor = if quote.has_both() {
        quote.lower()
    } else {
        quote.secondhand
    };

    floor
        .map(|price| price * params.lower_reference_ratio)
        .or_else(|| quote.retail.map(|price| price * params.higher_reference_ratio))
}
