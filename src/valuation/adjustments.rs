//! Realization rate adjustments
//!
//! The composed rate is `base * m1 * m2 * ...`, each multiplier coming from
//! one named rule applied left to right, then clamped into the configured
//! band. New rules are added to the list rather than branched into the
//! engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::types::{Category, ChannelTier};
use crate::config::types::ValuationParams;

/// Facts about an item the adjustment rules look at
#[derive(Debug, Clone, PartialEq)]
pub struct RateContext {
    pub category: Category,
    pub reputation_score: u8,
    /// `None` when no channel has been chosen yet
    pub channel_tier: Option<ChannelTier>,
    /// `None` when the item does not expire
    pub months_until_expiry: Option<Decimal>,
}

/// A named multiplicative rule
#[derive(Debug, Clone, Copy)]
pub struct RateAdjustment {
    pub name: &'static str,
    pub multiplier: fn(&RateContext) -> Decimal,
}

/// One rule's contribution to a composed rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedAdjustment {
    pub name: String,
    pub multiplier: Decimal,
}

/// How a realization rate was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    pub base_rate: Decimal,
    pub adjustments: Vec<AppliedAdjustment>,
    /// Product of base and multipliers before clamping
    pub composed_rate: Decimal,
    /// Final rate inside the configured band
    pub rate: Decimal,
}

pub fn channel_multiplier(ctx: &RateContext) -> Decimal {
    match ctx.channel_tier {
        Some(ChannelTier::TopTier) => dec!(1.2),
        Some(ChannelTier::Wholesale) => dec!(0.8),
        _ => dec!(1.0),
    }
}

pub fn brand_multiplier(ctx: &RateContext) -> Decimal {
    match ctx.reputation_score {
        8..=u8::MAX => dec!(1.1),
        6..=7 => dec!(1.0),
        _ => dec!(0.7),
    }
}

pub fn category_multiplier(ctx: &RateContext) -> Decimal {
    match ctx.category {
        Category::Beverage => dec!(1.0),
        Category::HouseholdChemical => dec!(0.9),
        Category::Appliance => dec!(0.6),
        Category::Food => dec!(1.1),
        Category::Other => dec!(0.8),
    }
}

pub fn expiry_multiplier(ctx: &RateContext) -> Decimal {
    match ctx.months_until_expiry {
        None => dec!(1.0),
        Some(months) if months < dec!(1) => dec!(0.5),
        Some(months) if months < dec!(3) => dec!(0.8),
        Some(months) if months < dec!(6) => dec!(0.9),
        Some(_) => dec!(1.0),
    }
}

/// Channel, brand, category, expiry
pub fn default_adjustments() -> Vec<RateAdjustment> {
    vec![
        RateAdjustment {
            name: "channel_tier",
            multiplier: channel_multiplier,
        },
        RateAdjustment {
            name: "brand_reputation",
            multiplier: brand_multiplier,
        },
        RateAdjustment {
            name: "category",
            multiplier: category_multiplier,
        },
        RateAdjustment {
            name: "expiry",
            multiplier: expiry_multiplier,
        },
    ]
}

/// Base rate plus an ordered adjustment chain
#[derive(Debug, Clone)]
pub struct RealizationRateModel {
    params: ValuationParams,
    adjustments: Vec<RateAdjustment>,
}

impl RealizationRateModel {
    pub fn new(params: ValuationParams) -> Self {
        Self {
            params,
            adjustments: default_adjustments(),
        }
    }

    /// Append a rule after the default chain
    pub fn with_adjustment(mut self, adjustment: RateAdjustment) -> Self {
        self.adjustments.push(adjustment);
        self
    }

    pub fn params(&self) -> &ValuationParams {
        &self.params
    }

    pub fn clamp(&self, rate: Decimal) -> Decimal {
        rate.max(self.params.min_rate).min(self.params.max_rate)
    }

    pub fn compose(&self, ctx: &RateContext) -> RateBreakdown {
        let mut composed_rate = self.params.base_rate;
        let mut applied = Vec::with_capacity(self.adjustments.len());

        for adjustment in &self.adjustments {
            let multiplier = (adjustment.multiplier)(ctx);
            composed_rate *= multiplier;
            applied.push(AppliedAdjustment {
                name: adjustment.name.to_string(),
                multiplier,
            });
        }

        let rate = self.clamp(composed_rate);
        debug!(%composed_rate, %rate, "Composed realization rate");

        RateBreakdown {
            base_rate: self.params.base_rate,
            adjustments: applied,
            composed_rate,
            rate,
        }
    }
}

impl Default for RealizationRateModel {
    fn default() -> Self {
        Self::new(ValuationParams::default())
    }
}
