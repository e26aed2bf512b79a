//! Intake screening
//!
//! Goods offered in a barter are checked against house rules before a deal
//! is priced: no vouchers or service cards, no unknown brands, nothing about
//! to expire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::types::{BrandRef, InventoryItem};
use crate::config::types::ComplianceRules;

/// Which house rule an item broke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum ComplianceViolation {
    /// Face value is notional; resale recovers almost nothing
    ForbiddenCategory { keyword: String },
    /// Resellers will not push little-known brands
    LowReputation { score: u8, minimum: u8 },
    /// Logistics cannot outrun the expiry date
    ShortShelfLife { days_left: i64 },
}

impl std::fmt::Display for ComplianceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceViolation::ForbiddenCategory { keyword } => {
                write!(f, "'{keyword}' goods are not accepted")
            }
            ComplianceViolation::LowReputation { score, minimum } => {
                write!(f, "brand reputation {score} below minimum {minimum}")
            }
            ComplianceViolation::ShortShelfLife { days_left } => {
                write!(f, "only {days_left} days of shelf life left")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub inventory_id: String,
    pub passed: bool,
    pub violations: Vec<ComplianceViolation>,
}

pub fn check_compliance(
    rules: &ComplianceRules,
    item: &InventoryItem,
    brand: &BrandRef,
    today: NaiveDate,
) -> ComplianceReport {
    let mut violations = Vec::new();

    let name = item.product_name.to_lowercase();
    if let Some(keyword) = rules
        .forbidden_keywords
        .iter()
        .find(|k| name.contains(&k.to_lowercase()))
    {
        violations.push(ComplianceViolation::ForbiddenCategory {
            keyword: keyword.clone(),
        });
    }

    if brand.reputation_score < rules.min_reputation {
        violations.push(ComplianceViolation::LowReputation {
            score: brand.reputation_score,
            minimum: rules.min_reputation,
        });
    }

    if let (Some(months), Some(days_left)) = (
        item.months_until_expiry(today),
        item.days_until_expiry(today),
    ) {
        if months < rules.min_expiry_months {
            violations.push(ComplianceViolation::ShortShelfLife { days_left });
        }
    }

    ComplianceReport {
        inventory_id: item.id.clone(),
        passed: violations.is_empty(),
        violations,
    }
}
