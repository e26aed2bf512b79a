//! Integration tests for transaction assessment and intake screening

mod common;

use barter_realization::assessment::{
    ComplianceViolation, CostComponent, FeasibilityVeto, RiskFactorKind,
};
use barter_realization::{EngineError, InMemoryRecords, RiskLevel};
use common::{assessor, reference_date, sample_records, sample_snapshot};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

// ============================================================================
// Costs and profitability
// ============================================================================

#[test]
fn test_reference_deal_costs() {
    let records = sample_records();
    let result = assessor(&records)
        .assess_transaction("water", "elevator", "group-buy", Some(dec!(200)))
        .unwrap();

    assert_eq!(result.total_revenue, dec!(100000));
    assert_eq!(result.cost_breakdown[&CostComponent::AdvertisingCost], dec!(20000));
    assert_eq!(result.cost_breakdown[&CostComponent::ChannelCommission], dec!(5000));
    assert_eq!(result.cost_breakdown[&CostComponent::StorageCost], dec!(1000));
    assert_eq!(result.cost_breakdown[&CostComponent::LogisticsCost], dec!(2000));
    assert_eq!(result.cost_breakdown[&CostComponent::OperationalOverhead], dec!(1000));
    assert_eq!(result.total_cost, dec!(29000));
    assert_eq!(result.net_profit, dec!(71000));
    assert!(result.feasible);
    assert_eq!(result.risk_assessment.level, RiskLevel::Low);
    assert_eq!(result.product_name, "Sparkling water 330ml");
    assert_eq!(result.channel_name, "Group buy leaders");
    assert_eq!(result.media_name, "Elevator screens, 2 weeks");
}

#[test]
fn test_rate_model_revenue_for_expiring_goods() {
    let records = sample_records();
    let result = assessor(&records)
        .assess_transaction("water-expiring", "elevator", "group-buy", None)
        .unwrap();

    assert_eq!(result.realization_rate, dec!(0.0528));
    assert_eq!(result.total_revenue, dec!(52800));
    // 20000 media + 2640 commission + 1000 storage + 1056 logistics + 528 overhead
    assert_eq!(result.total_cost, dec!(25224));
    assert_eq!(result.net_profit, dec!(27576));
    assert_eq!(result.profit_margin, dec!(0.5223));
    assert_eq!(result.return_on_investment, dec!(1.0932));
    assert!(result.feasible);

    let risk = &result.risk_assessment;
    assert_eq!(risk.score, 7);
    assert_eq!(risk.level, RiskLevel::Medium);
    let kinds: Vec<_> = risk.factors.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![RiskFactorKind::RateTooLow, RiskFactorKind::ExpiryImminent]
    );
}

// ============================================================================
// Vetoes
// ============================================================================

#[test]
fn test_low_rate_is_vetoed_whatever_the_margin() {
    let records = sample_records();
    // 500 units at 60 against 1,000,000 book value
    let result = assessor(&records)
        .assess_transaction("water", "elevator", "group-buy", Some(dec!(60)))
        .unwrap();

    assert_eq!(result.realization_rate, dec!(0.03));
    assert!(!result.feasible);
    assert_eq!(result.veto, Some(FeasibilityVeto::RateBelowMinimum));
    assert_eq!(
        result.recommendations[0],
        "Deal is not feasible; re-evaluate before committing"
    );
}

#[test]
fn test_loss_making_deal_is_vetoed_on_margin() {
    let records = sample_records();
    let result = assessor(&records)
        .assess_transaction("spa-card", "elevator", "micro", Some(dec!(100)))
        .unwrap();

    assert_eq!(result.total_revenue, dec!(10000));
    assert_eq!(result.total_cost, dec!(21500));
    assert!(result.net_profit < Decimal::ZERO);
    assert_eq!(result.veto, Some(FeasibilityVeto::MarginBelowMinimum));
    assert_eq!(result.risk_assessment.score, 10);
    assert!(result.risk_assessment.is_high());
}

#[test]
fn test_veto_invariant_across_prices() {
    let records = sample_records();
    let assessor = assessor(&records);

    for channel in ["group-buy", "micro"] {
        for price in (10..=400).step_by(10) {
            let result = assessor
                .assess_transaction("water", "elevator", channel, Some(Decimal::from(price)))
                .unwrap();

            if result.realization_rate < dec!(0.05) || result.profit_margin < dec!(0.20) {
                assert!(!result.feasible, "price {price} via {channel} should be vetoed");
            }
            assert!(result.cost_breakdown.values().all(|v| *v >= Decimal::ZERO));
            assert_eq!(
                result.cost_breakdown.values().copied().sum::<Decimal>(),
                result.total_cost
            );
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_records_are_not_found() {
    let records = sample_records();
    let assessor = assessor(&records);

    let cases = [
        ("ghost", "elevator", "group-buy", "inventory item"),
        ("water", "billboard", "group-buy", "media resource"),
        ("water", "elevator", "nowhere", "sales channel"),
    ];
    for (item, media, channel, expected) in cases {
        match assessor.assess_transaction(item, media, channel, None) {
            Err(EngineError::NotFound { entity, .. }) => assert_eq!(entity, expected),
            other => panic!("expected NotFound for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn test_negative_price_rejected() {
    let records = sample_records();
    let err = assessor(&records)
        .assess_transaction("water", "elevator", "group-buy", Some(dec!(-5)))
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[test]
fn test_media_discount_above_list_price_rejected() {
    let mut snapshot = sample_snapshot();
    snapshot.media[0].discount_rate = dec!(150);
    let records =
        Arc::new(InMemoryRecords::from_snapshot(snapshot).with_reference_date(reference_date()));

    let err = assessor(&records)
        .assess_transaction("water", "elevator", "group-buy", Some(dec!(200)))
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[test]
fn test_assessment_serializes_named_costs() {
    let records = sample_records();
    let result = assessor(&records)
        .assess_transaction("water", "elevator", "group-buy", Some(dec!(200)))
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    let costs = json["cost_breakdown"].as_object().unwrap();
    let mut keys: Vec<_> = costs.keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "advertising_cost",
            "channel_commission",
            "logistics_cost",
            "operational_overhead",
            "storage_cost",
        ]
    );
    assert!(json.get("veto").is_none());
}

// ============================================================================
// Intake screening
// ============================================================================

#[test]
fn test_intake_screening() {
    let records = sample_records();
    let assessor = assessor(&records);

    assert!(assessor.check_intake("water").unwrap().passed);

    let spa = assessor.check_intake("spa-card").unwrap();
    assert!(!spa.passed);
    assert_eq!(
        spa.violations,
        vec![
            ComplianceViolation::ForbiddenCategory {
                keyword: "beauty card".to_string()
            },
            ComplianceViolation::LowReputation {
                score: 4,
                minimum: 6
            },
        ]
    );

    let expiring = assessor.check_intake("water-expiring").unwrap();
    assert_eq!(
        expiring.violations,
        vec![ComplianceViolation::ShortShelfLife { days_left: 20 }]
    );
}
