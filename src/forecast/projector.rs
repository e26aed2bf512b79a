use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument};

use super::types::{ForecastInput, ForecastResult, PeriodForecast};
use crate::common::errors::{EngineError, Result};
use crate::common::traits::{InventoryStore, TransactionHistory};
use crate::common::types::round_money;
use crate::config::types::ForecastParams;

/// Profit Forecast Projector
///
/// Per period `m` of `N`:
///
/// ```text
/// profit(m) = avg_daily_profit * days * (1 + growth * m)
///           + (pending_value * conversion / N) * realization
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfitForecaster {
    params: ForecastParams,
}

impl ProfitForecaster {
    pub fn new(params: ForecastParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ForecastParams {
        &self.params
    }

    /// Project `periods` periods from already-gathered aggregates
    pub fn project(&self, input: &ForecastInput, periods: u32) -> Result<ForecastResult> {
        if periods == 0 {
            return Err(EngineError::validation("forecast needs at least one period"));
        }

        let days = Decimal::from(self.params.period_days);
        let (avg_daily_profit, avg_daily_transactions) = if input.history.is_empty() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let n = Decimal::from(input.history.len());
            let profit: Decimal = input.history.iter().map(|d| d.profit).sum();
            let count: Decimal = input
                .history
                .iter()
                .map(|d| Decimal::from(d.transaction_count))
                .sum();
            (profit / n, count / n)
        };

        let pending_value = input.pending.total_value;
        let conversion = pending_value * self.params.inventory_conversion / Decimal::from(periods);
        let conversion_profit = conversion * self.params.inventory_realization;
        let predicted_transactions = (avg_daily_transactions * days)
            .trunc()
            .to_u64()
            .unwrap_or(0);

        let mut cumulative = Decimal::ZERO;
        let forecast: Vec<PeriodForecast> = (1..=periods)
            .map(|m| {
                let growth = Decimal::ONE + self.params.growth_per_period * Decimal::from(m);
                let predicted_profit =
                    round_money(avg_daily_profit * days * growth + conversion_profit);
                cumulative += predicted_profit;
                PeriodForecast {
                    period: m,
                    predicted_profit,
                    predicted_transactions,
                    inventory_conversion: round_money(conversion),
                    cumulative_profit: cumulative,
                }
            })
            .collect();

        Ok(ForecastResult {
            periods,
            historical_avg_profit: round_money(avg_daily_profit * days),
            pending_inventory_value: pending_value,
            total_predicted_profit: cumulative,
            forecast,
        })
    }

    /// Gather the trailing period and pending inventory, then project
    #[instrument(skip(self, history, inventory))]
    pub fn forecast_profit(
        &self,
        history: &Arc<dyn TransactionHistory>,
        inventory: &Arc<dyn InventoryStore>,
        periods: u32,
    ) -> Result<ForecastResult> {
        let input = ForecastInput {
            history: history.trailing_daily(self.params.period_days)?,
            pending: inventory.pending_inventory()?,
        };
        let result = self.project(&input, periods)?;

        info!(
            periods,
            history_days = input.history.len(),
            total = %result.total_predicted_profit,
            "Profit forecast projected"
        );
        Ok(result)
    }
}
