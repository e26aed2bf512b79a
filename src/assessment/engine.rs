use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::compliance::{check_compliance, ComplianceReport};
use super::costs::{CostBreakdown, CostCalculator, CostComponent};
use super::feasibility::{FeasibilityRules, FeasibilityVeto};
use super::risk::{assess_risk, RiskAssessment, RiskInputs};
use crate::common::errors::{EngineError, Result};
use crate::common::traits::{BrandDirectory, ChannelDirectory, InventoryStore, MediaDirectory};
use crate::common::types::{round_money, round_ratio};
use crate::config::types::AppConfig;
use crate::valuation::{RateContext, RealizationRateModel};

/// Full profit, risk and go/no-go picture for one proposed deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionAssessment {
    pub feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veto: Option<FeasibilityVeto>,
    pub total_revenue: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
    /// Net profit over revenue
    pub profit_margin: Decimal,
    /// Net profit over total cost
    pub return_on_investment: Decimal,
    pub realization_rate: Decimal,
    pub cost_breakdown: BTreeMap<CostComponent, Decimal>,
    pub risk_assessment: RiskAssessment,
    pub recommendations: Vec<String>,
    pub product_name: String,
    pub brand_name: String,
    pub channel_name: String,
    pub media_name: String,
}

/// Transaction Risk & Feasibility Engine
///
/// Prices a deal through a channel, itemizes its costs, scores its risk and
/// decides go/no-go. Reads collaborators only; nothing is written back.
pub struct TransactionAssessor {
    inventory: Arc<dyn InventoryStore>,
    brands: Arc<dyn BrandDirectory>,
    channels: Arc<dyn ChannelDirectory>,
    media: Arc<dyn MediaDirectory>,
    rate_model: RealizationRateModel,
    costs: CostCalculator,
    rules: FeasibilityRules,
    config: AppConfig,
    reference_date: Option<NaiveDate>,
}

impl TransactionAssessor {
    pub fn new(
        inventory: Arc<dyn InventoryStore>,
        brands: Arc<dyn BrandDirectory>,
        channels: Arc<dyn ChannelDirectory>,
        media: Arc<dyn MediaDirectory>,
        config: AppConfig,
    ) -> Self {
        Self {
            inventory,
            brands,
            channels,
            media,
            rate_model: RealizationRateModel::new(config.valuation.clone()),
            costs: CostCalculator::new(config.costs.clone()),
            rules: FeasibilityRules::new(config.feasibility.clone()),
            config,
            reference_date: None,
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Assess a deal, optionally at a fixed per-unit sale price
    ///
    /// Without a price, revenue is book value times the adjusted realization
    /// rate. With one, the rate is whatever that price implies and is not
    /// clamped, so an uneconomic price is vetoed rather than hidden.
    pub fn assess_transaction(
        &self,
        inventory_id: &str,
        media_id: &str,
        channel_id: &str,
        proposed_price: Option<Decimal>,
    ) -> Result<TransactionAssessment> {
        let item = self.inventory.get_item(inventory_id)?;
        item.validate()?;
        let brand = self.brands.get_brand(&item.brand_id)?;
        brand.validate()?;
        let media = self.media.get_media(media_id)?;
        media.validate()?;
        let channel = self.channels.get_channel(channel_id)?;
        channel.validate()?;

        let today = self.today();
        let (total_revenue, realization_rate) = match proposed_price {
            Some(price) if price < Decimal::ZERO => {
                return Err(EngineError::validation(format!(
                    "proposed price {price} is negative"
                )));
            }
            Some(price) => {
                let revenue = price * Decimal::from(item.quantity);
                let rate = if item.original_value > Decimal::ZERO {
                    revenue / item.original_value
                } else {
                    Decimal::ZERO
                };
                (revenue, rate)
            }
            None => {
                let breakdown = self.rate_model.compose(&RateContext {
                    category: item.category,
                    reputation_score: brand.reputation_score,
                    channel_tier: Some(channel.tier),
                    months_until_expiry: item.months_until_expiry(today),
                });
                (item.original_value * breakdown.rate, breakdown.rate)
            }
        };
        let total_revenue = round_money(total_revenue);

        let costs: CostBreakdown = self.costs.breakdown(
            media.effective_cost(),
            total_revenue,
            item.quantity,
            channel.commission_rate,
        )?;
        let total_cost = costs.total();
        let net_profit = total_revenue - total_cost;
        let profit_margin = if total_revenue > Decimal::ZERO {
            net_profit / total_revenue
        } else {
            Decimal::ZERO
        };
        let roi = if total_cost > Decimal::ZERO {
            net_profit / total_cost
        } else {
            Decimal::ZERO
        };

        let risk = assess_risk(&self.config.risk, &RiskInputs {
            realization_rate,
            profit_margin,
            reputation_score: brand.reputation_score,
            days_until_expiry: item.days_until_expiry(today),
            channel_tier: channel.tier,
        });
        let decision = self.rules.decide(realization_rate, profit_margin, roi, &risk);

        if decision.feasible {
            info!(
                inventory_id,
                channel_id,
                %net_profit,
                risk = %risk.level,
                "Transaction feasible"
            );
        } else {
            warn!(
                inventory_id,
                channel_id,
                veto = ?decision.veto,
                %net_profit,
                "Transaction not feasible"
            );
        }

        Ok(TransactionAssessment {
            feasible: decision.feasible,
            veto: decision.veto,
            total_revenue,
            total_cost,
            net_profit,
            profit_margin: round_ratio(profit_margin),
            return_on_investment: round_ratio(roi),
            realization_rate: round_ratio(realization_rate),
            cost_breakdown: costs.to_map(),
            risk_assessment: risk,
            recommendations: decision.recommendations,
            product_name: item.product_name,
            brand_name: brand.name,
            channel_name: channel.name,
            media_name: media.name,
        })
    }

    /// Screen an item against the intake rules
    pub fn check_intake(&self, inventory_id: &str) -> Result<ComplianceReport> {
        let item = self.inventory.get_item(inventory_id)?;
        let brand = self.brands.get_brand(&item.brand_id)?;
        let report = check_compliance(&self.config.compliance, &item, &brand, self.today());
        if !report.passed {
            warn!(
                inventory_id,
                violations = report.violations.len(),
                "Item failed intake screening"
            );
        }
        Ok(report)
    }
}
