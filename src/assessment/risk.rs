use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::types::{ChannelTier, RiskLevel};
use crate::config::types::RiskParams;

/// What raised a transaction's risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    RateTooLow,
    RateMarginal,
    MarginTooLow,
    MarginModest,
    WeakBrand,
    ExpiryImminent,
    ExpiryNear,
    UncertifiedChannel,
}

impl RiskFactorKind {
    pub fn description(&self) -> &'static str {
        match self {
            RiskFactorKind::RateTooLow => "Realization rate too low; expected returns may not materialize",
            RiskFactorKind::RateMarginal => "Realization rate marginal; evaluate carefully",
            RiskFactorKind::MarginTooLow => "Profit margin too low to absorb setbacks",
            RiskFactorKind::MarginModest => "Profit margin modest; costs must be kept tight",
            RiskFactorKind::WeakBrand => "Brand is little known; goods will be hard to sell",
            RiskFactorKind::ExpiryImminent => "Goods expire within a month; time risk is extreme",
            RiskFactorKind::ExpiryNear => "Goods expire within three months; must move quickly",
            RiskFactorKind::UncertifiedChannel => "Channel is not certified; settlement risk is higher",
        }
    }
}

/// One triggered rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub points: u32,
    pub description: String,
}

impl RiskFactor {
    fn new(kind: RiskFactorKind, params: &RiskParams) -> Self {
        Self {
            kind,
            points: params.points_for(kind),
            description: kind.description().to_string(),
        }
    }
}

impl RiskParams {
    pub fn points_for(&self, kind: RiskFactorKind) -> u32 {
        let points = &self.points;
        match kind {
            RiskFactorKind::RateTooLow => points.rate_too_low,
            RiskFactorKind::RateMarginal => points.rate_marginal,
            RiskFactorKind::MarginTooLow => points.margin_too_low,
            RiskFactorKind::MarginModest => points.margin_modest,
            RiskFactorKind::WeakBrand => points.weak_brand,
            RiskFactorKind::ExpiryImminent => points.expiry_imminent,
            RiskFactorKind::ExpiryNear => points.expiry_near,
            RiskFactorKind::UncertifiedChannel => points.uncertified_channel,
        }
    }

    /// Transaction level for a score (high from 8, medium from 4 by default)
    pub fn level_for_score(&self, score: u32) -> RiskLevel {
        if score >= self.high_score {
            RiskLevel::High
        } else if score >= self.medium_score {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Everything the risk rules look at
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInputs {
    pub realization_rate: Decimal,
    pub profit_margin: Decimal,
    pub reputation_score: u8,
    /// `None` when the goods do not expire
    pub days_until_expiry: Option<i64>,
    pub channel_tier: ChannelTier,
}

/// Additive risk score, its level and the factors behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    /// In rule order
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }
}

/// Risk Assessment Module
///
/// Each rule adds its configured points; rules are checked in a fixed order
/// and the factors are reported in that order.
pub fn assess_risk(params: &RiskParams, inputs: &RiskInputs) -> RiskAssessment {
    let mut kinds = Vec::new();

    if inputs.realization_rate < params.rate_too_low {
        kinds.push(RiskFactorKind::RateTooLow);
    } else if inputs.realization_rate < params.rate_marginal {
        kinds.push(RiskFactorKind::RateMarginal);
    }

    if inputs.profit_margin < params.margin_too_low {
        kinds.push(RiskFactorKind::MarginTooLow);
    } else if inputs.profit_margin < params.margin_modest {
        kinds.push(RiskFactorKind::MarginModest);
    }

    if inputs.reputation_score < params.min_reputation {
        kinds.push(RiskFactorKind::WeakBrand);
    }

    match inputs.days_until_expiry {
        Some(days) if days < params.expiry_imminent_days => {
            kinds.push(RiskFactorKind::ExpiryImminent)
        }
        Some(days) if days < params.expiry_near_days => kinds.push(RiskFactorKind::ExpiryNear),
        _ => {}
    }

    if !inputs.channel_tier.is_certified() {
        kinds.push(RiskFactorKind::UncertifiedChannel);
    }

    let factors: Vec<RiskFactor> = kinds
        .into_iter()
        .map(|kind| RiskFactor::new(kind, params))
        .collect();
    let score: u32 = factors.iter().map(|f| f.points).sum();

    RiskAssessment {
        score,
        level: params.level_for_score(score),
        factors,
    }
}
