use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::risk::RiskAssessment;
use crate::common::types::RiskLevel;
use crate::config::types::FeasibilityThresholds;

/// First rule that blocked a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityVeto {
    RateBelowMinimum,
    MarginBelowMinimum,
    RoiBelowMinimum,
    HighRiskInsufficientReturn,
}

/// Go/no-go outcome with advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityDecision {
    pub feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veto: Option<FeasibilityVeto>,
    pub recommendations: Vec<String>,
}

/// Feasibility Decision
///
/// Hard vetoes in order: rate, margin, ROI, then high risk needing both a
/// wider margin and a higher ROI. Recommendations never change the outcome.
#[derive(Debug, Clone, Default)]
pub struct FeasibilityRules {
    thresholds: FeasibilityThresholds,
}

impl FeasibilityRules {
    pub fn new(thresholds: FeasibilityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &FeasibilityThresholds {
        &self.thresholds
    }

    pub fn decide(
        &self,
        realization_rate: Decimal,
        profit_margin: Decimal,
        roi: Decimal,
        risk: &RiskAssessment,
    ) -> FeasibilityDecision {
        let veto = self.veto(realization_rate, profit_margin, roi, risk);
        let feasible = veto.is_none();
        let recommendations =
            self.recommendations(feasible, realization_rate, profit_margin, roi, risk);

        debug!(feasible, ?veto, "Feasibility decided");
        FeasibilityDecision {
            feasible,
            veto,
            recommendations,
        }
    }

    fn veto(
        &self,
        realization_rate: Decimal,
        profit_margin: Decimal,
        roi: Decimal,
        risk: &RiskAssessment,
    ) -> Option<FeasibilityVeto> {
        let t = &self.thresholds;
        if realization_rate < t.min_realization_rate {
            return Some(FeasibilityVeto::RateBelowMinimum);
        }
        if profit_margin < t.min_profit_margin {
            return Some(FeasibilityVeto::MarginBelowMinimum);
        }
        if roi < t.min_roi {
            return Some(FeasibilityVeto::RoiBelowMinimum);
        }
        if risk.is_high() && !(profit_margin > t.high_risk_margin && roi > t.high_risk_roi) {
            return Some(FeasibilityVeto::HighRiskInsufficientReturn);
        }
        None
    }

    fn recommendations(
        &self,
        feasible: bool,
        realization_rate: Decimal,
        profit_margin: Decimal,
        roi: Decimal,
        risk: &RiskAssessment,
    ) -> Vec<String> {
        let t = &self.thresholds;
        let mut advice = vec![if feasible {
            "Deal is feasible; proceed".to_string()
        } else {
            "Deal is not feasible; re-evaluate before committing".to_string()
        }];

        if realization_rate < t.min_realization_rate {
            advice.push("Realization rate below minimum; consider other goods or channels".into());
        } else if realization_rate < t.advisory_rate {
            advice.push("Realization rate on the low side; look for a stronger channel".into());
        }

        if profit_margin < t.min_profit_margin {
            advice.push("Profit margin below target; cut costs or raise the sale price".into());
        } else if profit_margin < t.advisory_margin {
            advice.push("Profit margin is thin; keep costs tightly controlled".into());
        }

        if roi < t.min_roi {
            advice.push("Return on investment below target; renegotiate the media cost".into());
        }

        match risk.level {
            RiskLevel::High => {
                advice.push("Risk is high; consider walking away or finding an alternative".into())
            }
            RiskLevel::Medium => {
                advice.push("Risk factors present; prepare a mitigation plan".into())
            }
            RiskLevel::Low => {}
        }

        advice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RiskParams;
    use rust_decimal_macros::dec;

    fn risk(score: u32) -> RiskAssessment {
        RiskAssessment {
            score,
            level: RiskParams::default().level_for_score(score),
            factors: vec![],
        }
    }

    #[test]
    fn test_healthy_deal() {
        let decision = FeasibilityRules::default().decide(dec!(0.10), dec!(0.60), dec!(1.6), &risk(0));
        assert!(decision.feasible);
        assert_eq!(decision.veto, None);
        assert_eq!(decision.recommendations, vec!["Deal is feasible; proceed"]);
    }

    #[test]
    fn test_rate_veto_beats_everything() {
        let decision =
            FeasibilityRules::default().decide(dec!(0.03), dec!(0.90), dec!(9.0), &risk(0));
        assert!(!decision.feasible);
        assert_eq!(decision.veto, Some(FeasibilityVeto::RateBelowMinimum));
    }

    #[test]
    fn test_margin_and_roi_vetoes() {
        let rules = FeasibilityRules::default();
        let margin = rules.decide(dec!(0.10), dec!(0.19), dec!(2.0), &risk(0));
        assert_eq!(margin.veto, Some(FeasibilityVeto::MarginBelowMinimum));

        let roi = rules.decide(dec!(0.10), dec!(0.30), dec!(0.45), &risk(0));
        assert_eq!(roi.veto, Some(FeasibilityVeto::RoiBelowMinimum));
    }

    #[test]
    fn test_high_risk_needs_stronger_returns() {
        let rules = FeasibilityRules::default();
        let weak = rules.decide(dec!(0.10), dec!(0.30), dec!(1.5), &risk(9));
        assert_eq!(weak.veto, Some(FeasibilityVeto::HighRiskInsufficientReturn));

        let strong = rules.decide(dec!(0.10), dec!(0.35), dec!(1.2), &risk(9));
        assert!(strong.feasible);
        assert!(strong
            .recommendations
            .iter()
            .any(|r| r.starts_with("Risk is high")));
    }

    #[test]
    fn test_advice_does_not_flip_outcome() {
        let decision =
            FeasibilityRules::default().decide(dec!(0.06), dec!(0.22), dec!(0.8), &risk(5));
        assert!(decision.feasible);
        assert_eq!(decision.recommendations.len(), 4);
    }
}
