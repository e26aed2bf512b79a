//! Configuration types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Realization valuation parameters
    #[serde(default)]
    pub valuation: ValuationParams,
    /// Cost breakdown rates
    #[serde(default)]
    pub costs: CostParams,
    /// Feasibility thresholds
    #[serde(default)]
    pub feasibility: FeasibilityThresholds,
    /// Transaction risk rule table
    #[serde(default)]
    pub risk: RiskParams,
    /// Profit forecast assumptions
    #[serde(default)]
    pub forecast: ForecastParams,
    /// Price source behaviour
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Intake compliance rules
    #[serde(default)]
    pub compliance: ComplianceRules,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Parameters of the realization valuation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationParams {
    /// Starting realization rate before adjustments
    #[serde(default = "default_base_rate")]
    pub base_rate: Decimal,
    #[serde(default = "default_min_rate")]
    pub min_rate: Decimal,
    #[serde(default = "default_max_rate")]
    pub max_rate: Decimal,
    /// Share of book value used as market value when no price is known
    #[serde(default = "default_fallback_market_ratio")]
    pub fallback_market_ratio: Decimal,
    /// Share of the lower reference price offered for resale
    #[serde(default = "default_lower_reference_ratio")]
    pub lower_reference_ratio: Decimal,
    /// Share of the higher reference price when only that one is known
    #[serde(default = "default_higher_reference_ratio")]
    pub higher_reference_ratio: Decimal,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self {
            base_rate: default_base_rate(),
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            fallback_market_ratio: default_fallback_market_ratio(),
            lower_reference_ratio: default_lower_reference_ratio(),
            higher_reference_ratio: default_higher_reference_ratio(),
        }
    }
}

fn default_base_rate() -> Decimal {
    dec!(0.08)
}

fn default_min_rate() -> Decimal {
    dec!(0.05)
}

fn default_max_rate() -> Decimal {
    dec!(0.15)
}

fn default_fallback_market_ratio() -> Decimal {
    dec!(0.30)
}

fn default_lower_reference_ratio() -> Decimal {
    dec!(0.60)
}

fn default_higher_reference_ratio() -> Decimal {
    dec!(0.50)
}

/// Fixed rates used when itemizing transaction costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    /// Warehousing cost per unit
    #[serde(default = "default_storage_per_unit")]
    pub storage_per_unit: Decimal,
    /// Logistics as a fraction of revenue
    #[serde(default = "default_logistics_ratio")]
    pub logistics_ratio: Decimal,
    /// Staff and admin overhead as a fraction of revenue
    #[serde(default = "default_overhead_ratio")]
    pub overhead_ratio: Decimal,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            storage_per_unit: default_storage_per_unit(),
            logistics_ratio: default_logistics_ratio(),
            overhead_ratio: default_overhead_ratio(),
        }
    }
}

fn default_storage_per_unit() -> Decimal {
    dec!(2)
}

fn default_logistics_ratio() -> Decimal {
    dec!(0.02)
}

fn default_overhead_ratio() -> Decimal {
    dec!(0.01)
}

/// Go/no-go thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityThresholds {
    #[serde(default = "default_min_rate")]
    pub min_realization_rate: Decimal,
    #[serde(default = "default_min_margin")]
    pub min_profit_margin: Decimal,
    #[serde(default = "default_min_roi")]
    pub min_roi: Decimal,
    /// Margin a high-risk deal must exceed
    #[serde(default = "default_high_risk_margin")]
    pub high_risk_margin: Decimal,
    /// ROI a high-risk deal must exceed
    #[serde(default = "default_high_risk_roi")]
    pub high_risk_roi: Decimal,
    /// Rate below which a passing deal still gets a warning
    #[serde(default = "default_base_rate")]
    pub advisory_rate: Decimal,
    /// Margin below which a passing deal still gets a warning
    #[serde(default = "default_advisory_margin")]
    pub advisory_margin: Decimal,
}

impl Default for FeasibilityThresholds {
    fn default() -> Self {
        Self {
            min_realization_rate: default_min_rate(),
            min_profit_margin: default_min_margin(),
            min_roi: default_min_roi(),
            high_risk_margin: default_high_risk_margin(),
            high_risk_roi: default_high_risk_roi(),
            advisory_rate: default_base_rate(),
            advisory_margin: default_advisory_margin(),
        }
    }
}

fn default_min_margin() -> Decimal {
    dec!(0.20)
}

fn default_min_roi() -> Decimal {
    dec!(0.50)
}

fn default_high_risk_margin() -> Decimal {
    dec!(0.30)
}

fn default_high_risk_roi() -> Decimal {
    dec!(1.00)
}

fn default_advisory_margin() -> Decimal {
    dec!(0.25)
}

/// Bands and points of the additive transaction risk rules
///
/// Each band is an exclusive upper bound: a rate below `rate_too_low` scores
/// `points.rate_too_low`, else below `rate_marginal` scores
/// `points.rate_marginal`, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskParams {
    #[serde(default = "default_rate_too_low")]
    pub rate_too_low: Decimal,
    #[serde(default = "default_base_rate")]
    pub rate_marginal: Decimal,
    #[serde(default = "default_margin_too_low")]
    pub margin_too_low: Decimal,
    #[serde(default = "default_advisory_margin")]
    pub margin_modest: Decimal,
    /// Reputation below which a brand counts as weak
    #[serde(default = "default_min_reputation")]
    pub min_reputation: u8,
    #[serde(default = "default_expiry_imminent_days")]
    pub expiry_imminent_days: i64,
    #[serde(default = "default_expiry_near_days")]
    pub expiry_near_days: i64,
    /// Lowest score rated medium
    #[serde(default = "default_medium_score")]
    pub medium_score: u32,
    /// Lowest score rated high
    #[serde(default = "default_high_score")]
    pub high_score: u32,
    #[serde(default)]
    pub points: RiskPoints,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            rate_too_low: default_rate_too_low(),
            rate_marginal: default_base_rate(),
            margin_too_low: default_margin_too_low(),
            margin_modest: default_advisory_margin(),
            min_reputation: default_min_reputation(),
            expiry_imminent_days: default_expiry_imminent_days(),
            expiry_near_days: default_expiry_near_days(),
            medium_score: default_medium_score(),
            high_score: default_high_score(),
            points: RiskPoints::default(),
        }
    }
}

fn default_rate_too_low() -> Decimal {
    dec!(0.06)
}

fn default_margin_too_low() -> Decimal {
    dec!(0.15)
}

fn default_expiry_imminent_days() -> i64 {
    30
}

fn default_expiry_near_days() -> i64 {
    90
}

fn default_medium_score() -> u32 {
    4
}

fn default_high_score() -> u32 {
    8
}

/// Points added by each triggered risk rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPoints {
    #[serde(default = "default_severe_points")]
    pub rate_too_low: u32,
    #[serde(default = "default_mild_points")]
    pub rate_marginal: u32,
    #[serde(default = "default_severe_points")]
    pub margin_too_low: u32,
    #[serde(default = "default_mild_points")]
    pub margin_modest: u32,
    #[serde(default = "default_moderate_points")]
    pub weak_brand: u32,
    #[serde(default = "default_expiry_imminent_points")]
    pub expiry_imminent: u32,
    #[serde(default = "default_moderate_points")]
    pub expiry_near: u32,
    #[serde(default = "default_moderate_points")]
    pub uncertified_channel: u32,
}

impl Default for RiskPoints {
    fn default() -> Self {
        Self {
            rate_too_low: default_severe_points(),
            rate_marginal: default_mild_points(),
            margin_too_low: default_severe_points(),
            margin_modest: default_mild_points(),
            weak_brand: default_moderate_points(),
            expiry_imminent: default_expiry_imminent_points(),
            expiry_near: default_moderate_points(),
            uncertified_channel: default_moderate_points(),
        }
    }
}

fn default_mild_points() -> u32 {
    1
}

fn default_moderate_points() -> u32 {
    2
}

fn default_severe_points() -> u32 {
    3
}

fn default_expiry_imminent_points() -> u32 {
    4
}

/// Assumptions behind the multi-period profit projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Days in one forecast period
    #[serde(default = "default_period_days")]
    pub period_days: u32,
    /// Flat growth added per period
    #[serde(default = "default_growth_per_period")]
    pub growth_per_period: Decimal,
    /// Share of pending inventory expected to convert over the horizon
    #[serde(default = "default_inventory_conversion")]
    pub inventory_conversion: Decimal,
    /// Realization rate applied to converted inventory
    #[serde(default = "default_base_rate")]
    pub inventory_realization: Decimal,
    #[serde(default = "default_periods")]
    pub default_periods: u32,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            growth_per_period: default_growth_per_period(),
            inventory_conversion: default_inventory_conversion(),
            inventory_realization: default_base_rate(),
            default_periods: default_periods(),
        }
    }
}

fn default_period_days() -> u32 {
    30
}

fn default_growth_per_period() -> Decimal {
    dec!(0.05)
}

fn default_inventory_conversion() -> Decimal {
    dec!(0.30)
}

fn default_periods() -> u32 {
    3
}

/// Price source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Per-source lookup timeout in milliseconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
    /// Delay between items in a batch run, applied by the caller
    #[serde(default = "default_batch_pacing")]
    pub batch_pacing_ms: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout(),
            batch_pacing_ms: default_batch_pacing(),
        }
    }
}

fn default_lookup_timeout() -> u64 {
    2000
}

fn default_batch_pacing() -> u64 {
    1000
}

/// Rules goods must pass before they are accepted in a barter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRules {
    /// Product keywords that are never accepted (vouchers and the like)
    #[serde(default = "default_forbidden_keywords")]
    pub forbidden_keywords: Vec<String>,
    #[serde(default = "default_min_reputation")]
    pub min_reputation: u8,
    /// Minimum remaining shelf life in 30-day months
    #[serde(default = "default_min_expiry_months")]
    pub min_expiry_months: Decimal,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            forbidden_keywords: default_forbidden_keywords(),
            min_reputation: default_min_reputation(),
            min_expiry_months: default_min_expiry_months(),
        }
    }
}

fn default_forbidden_keywords() -> Vec<String> {
    vec![
        "beauty card".to_string(),
        "service voucher".to_string(),
        "coupon".to_string(),
    ]
}

fn default_min_reputation() -> u8 {
    6
}

fn default_min_expiry_months() -> Decimal {
    dec!(3)
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
