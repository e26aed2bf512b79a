use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::ValuationResult;
use crate::common::types::{round_money, round_ratio, RiskLevel};

/// Portfolio-level figures over a batch of valuations
///
/// Handed as a plain record to whatever produces pricing reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationSummary {
    pub item_count: usize,
    pub total_original_value: Decimal,
    pub total_expected_return: Decimal,
    pub average_realization_rate: Decimal,
    pub low_risk_items: usize,
    pub high_risk_items: usize,
}

impl ValuationSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ValuationResult>) -> Self {
        let mut summary = Self::default();
        let mut rate_sum = Decimal::ZERO;

        for result in results {
            summary.item_count += 1;
            summary.total_original_value += result.original_value;
            summary.total_expected_return += result.expected_cash_return;
            rate_sum += result.realization_rate;
            match result.risk_level {
                RiskLevel::Low => summary.low_risk_items += 1,
                RiskLevel::High => summary.high_risk_items += 1,
                RiskLevel::Medium => {}
            }
        }

        if summary.item_count > 0 {
            summary.average_realization_rate =
                round_ratio(rate_sum / Decimal::from(summary.item_count));
        }
        summary.total_expected_return = round_money(summary.total_expected_return);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceQuote;
    use crate::valuation::adjustments::RateBreakdown;
    use crate::valuation::types::ReturnBasis;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn result(rate: Decimal, value: Decimal, risk_level: RiskLevel) -> ValuationResult {
        ValuationResult {
            inventory_id: "i".to_string(),
            product_name: "p".to_string(),
            original_value: value,
            market_value: dec!(0),
            realization_rate: rate,
            recommended_sale_price: None,
            expected_cash_return: value * rate,
            basis: ReturnBasis::RateModel,
            risk_level,
            risk_score: 0,
            rate_breakdown: RateBreakdown {
                base_rate: dec!(0.08),
                adjustments: vec![],
                composed_rate: rate,
                rate,
            },
            price_sources: PriceQuote::default(),
            valued_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_summary_totals() {
        let results = vec![
            result(dec!(0.05), dec!(100000), RiskLevel::Low),
            result(dec!(0.10), dec!(200000), RiskLevel::High),
            result(dec!(0.15), dec!(100000), RiskLevel::Medium),
        ];
        let summary = ValuationSummary::from_results(&results);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_original_value, dec!(400000));
        assert_eq!(summary.total_expected_return, dec!(40000));
        assert_eq!(summary.average_realization_rate, dec!(0.10));
        assert_eq!(summary.low_risk_items, 1);
        assert_eq!(summary.high_risk_items, 1);
    }

    #[test]
    fn test_empty_batch() {
        let summary = ValuationSummary::from_results(&Vec::<ValuationResult>::new());
        assert_eq!(summary, ValuationSummary::default());
    }
}
