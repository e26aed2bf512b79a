//! Transaction Risk & Feasibility Engine
//!
//! For a proposed deal (inventory item, media slot given in exchange, resale
//! channel) this module itemizes costs, computes margin and ROI, scores risk
//! from a configurable rule table and makes a go/no-go call. Intake screening
//! of offered goods lives here too.

mod compliance;
mod costs;
mod engine;
mod feasibility;
mod risk;

pub use compliance::{check_compliance, ComplianceReport, ComplianceViolation};
pub use costs::{CostBreakdown, CostCalculator, CostComponent};
pub use engine::{TransactionAssessment, TransactionAssessor};
pub use feasibility::{FeasibilityDecision, FeasibilityRules, FeasibilityVeto};
pub use risk::{assess_risk, RiskAssessment, RiskFactor, RiskFactorKind, RiskInputs};
