use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::common::errors::{EngineError, Result};
use crate::common::types::round_money;
use crate::config::types::CostParams;

/// Named line items of a transaction's cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    AdvertisingCost,
    ChannelCommission,
    StorageCost,
    LogisticsCost,
    OperationalOverhead,
}

/// Itemized costs, each rounded to cents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Actual cost of the media slot given away
    pub advertising_cost: Decimal,
    pub channel_commission: Decimal,
    pub storage_cost: Decimal,
    pub logistics_cost: Decimal,
    pub operational_overhead: Decimal,
}

impl CostBreakdown {
    /// Sum of all components
    pub fn total(&self) -> Decimal {
        self.advertising_cost
            + self.channel_commission
            + self.storage_cost
            + self.logistics_cost
            + self.operational_overhead
    }

    pub fn to_map(&self) -> BTreeMap<CostComponent, Decimal> {
        BTreeMap::from([
            (CostComponent::AdvertisingCost, self.advertising_cost),
            (CostComponent::ChannelCommission, self.channel_commission),
            (CostComponent::StorageCost, self.storage_cost),
            (CostComponent::LogisticsCost, self.logistics_cost),
            (CostComponent::OperationalOverhead, self.operational_overhead),
        ])
    }
}

/// Cost Breakdown Calculator
#[derive(Debug, Clone, Default)]
pub struct CostCalculator {
    params: CostParams,
}

impl CostCalculator {
    pub fn new(params: CostParams) -> Self {
        Self { params }
    }

    /// Itemize costs for a deal
    ///
    /// # Arguments
    /// * `media_cost` - Actual cost of the advertising given in exchange
    /// * `revenue` - Total resale revenue
    /// * `quantity` - Units to warehouse
    /// * `commission_rate` - Channel commission as a percentage (0-100)
    pub fn breakdown(
        &self,
        media_cost: Decimal,
        revenue: Decimal,
        quantity: u32,
        commission_rate: Decimal,
    ) -> Result<CostBreakdown> {
        if media_cost < Decimal::ZERO {
            return Err(EngineError::validation(format!(
                "negative media cost {media_cost}"
            )));
        }
        if revenue < Decimal::ZERO {
            return Err(EngineError::validation(format!("negative revenue {revenue}")));
        }
        if commission_rate < Decimal::ZERO || commission_rate > dec!(100) {
            return Err(EngineError::validation(format!(
                "commission rate {commission_rate} outside 0-100"
            )));
        }

        let breakdown = CostBreakdown {
            advertising_cost: round_money(media_cost),
            channel_commission: round_money(revenue * commission_rate / dec!(100)),
            storage_cost: round_money(Decimal::from(quantity) * self.params.storage_per_unit),
            logistics_cost: round_money(revenue * self.params.logistics_ratio),
            operational_overhead: round_money(revenue * self.params.overhead_ratio),
        };

        debug!(?breakdown, total = %breakdown.total(), "Cost breakdown");
        Ok(breakdown)
    }
}
