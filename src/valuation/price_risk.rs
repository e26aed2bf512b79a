//! Valuation confidence rating
//!
//! Rates how far a valuation can be trusted from brand reputation, remaining
//! shelf life and how well the two reference markets agree.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::types::RiskLevel;
use crate::pricing::PriceQuote;

/// Accumulated score and its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRisk {
    pub score: u32,
    pub level: RiskLevel,
}

pub fn rate_price_risk(
    reputation_score: u8,
    months_until_expiry: Option<Decimal>,
    quote: &PriceQuote,
) -> PriceRisk {
    let mut score = match reputation_score {
        8..=u8::MAX => 1,
        6..=7 => 2,
        _ => 3,
    };

    score += match months_until_expiry {
        None => 0,
        Some(months) if months >= dec!(6) => 1,
        Some(months) if months >= dec!(3) => 2,
        Some(_) => 5,
    };

    score += match (quote.lower(), quote.higher()) {
        (Some(low), Some(high)) if quote.has_both() => {
            let spread = (high - low) / high;
            if spread < dec!(0.2) {
                1
            } else if spread < dec!(0.4) {
                2
            } else {
                3
            }
        }
        _ => 3,
    };

    let level = match score {
        0..=3 => RiskLevel::Low,
        4..=6 => RiskLevel::Medium,
        _ => RiskLevel::High,
    };

    PriceRisk { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_prices_reputable_brand() {
        let quote = PriceQuote::new(Some(dec!(35.9)), Some(dec!(32.0)));
        let risk = rate_price_risk(9, None, &quote);
        assert_eq!(risk.score, 2);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_missing_prices_count_against() {
        let risk = rate_price_risk(9, Some(dec!(12)), &PriceQuote::default());
        assert_eq!(risk.score, 1 + 1 + 3);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn test_wide_spread_and_short_shelf_life() {
        // spread (199 - 100) / 199 is just under 0.5
        let quote = PriceQuote::new(Some(dec!(199)), Some(dec!(100)));
        let risk = rate_price_risk(4, Some(dec!(1)), &quote);
        assert_eq!(risk.score, 3 + 5 + 3);
        assert_eq!(risk.level, RiskLevel::High);
    }
}
