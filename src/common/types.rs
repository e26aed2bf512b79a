//! Domain records shared by the engines and their collaborators

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::errors::{EngineError, Result};

/// Product category of a bartered inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Beverage,
    HouseholdChemical,
    Appliance,
    Food,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Beverage => write!(f, "beverage"),
            Category::HouseholdChemical => write!(f, "household_chemical"),
            Category::Appliance => write!(f, "appliance"),
            Category::Food => write!(f, "food"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Lifecycle of an inventory record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Sold,
}

/// Goods received from a brand in exchange for advertising
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub brand_id: String,
    pub product_name: String,
    pub category: Category,
    pub quantity: u32,
    /// Book value declared by the brand
    pub original_value: Decimal,
    /// Market-grounded value, overwritten by the valuation engine
    #[serde(default)]
    pub market_value: Option<Decimal>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InventoryStatus,
}

impl InventoryItem {
    /// Reject records the engines cannot reason about
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(EngineError::validation(format!(
                "inventory item {} has zero quantity",
                self.id
            )));
        }
        if self.original_value.is_sign_negative() {
            return Err(EngineError::validation(format!(
                "inventory item {} has negative original value {}",
                self.id, self.original_value
            )));
        }
        if let Some(market_value) = self.market_value {
            if market_value.is_sign_negative() {
                return Err(EngineError::validation(format!(
                    "inventory item {} has negative market value {}",
                    self.id, market_value
                )));
            }
        }
        Ok(())
    }

    /// Whole days left before expiry; negative once expired
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry_date
            .map(|expiry| expiry.signed_duration_since(today).num_days())
    }

    /// Remaining shelf life in 30-day months
    pub fn months_until_expiry(&self, today: NaiveDate) -> Option<Decimal> {
        self.days_until_expiry(today)
            .map(|days| Decimal::from(days) / dec!(30))
    }
}

/// Brand that supplied the goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRef {
    pub id: String,
    pub name: String,
    /// Reputation on a 1-10 scale
    #[serde(default = "default_reputation")]
    pub reputation_score: u8,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_reputation() -> u8 {
    5
}

impl BrandRef {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10).contains(&self.reputation_score) {
            return Err(EngineError::validation(format!(
                "brand {} reputation {} outside 1-10",
                self.id, self.reputation_score
            )));
        }
        Ok(())
    }
}

/// Lifecycle of an advertising slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    #[default]
    Idle,
    Occupied,
    Maintenance,
    Reserved,
}

/// Advertising inventory traded against the goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaResource {
    pub id: String,
    pub name: String,
    pub list_price: Decimal,
    /// Percentage of list price actually paid
    #[serde(default = "default_discount_rate")]
    pub discount_rate: Decimal,
    #[serde(default)]
    pub actual_cost: Option<Decimal>,
    #[serde(default)]
    pub status: MediaStatus,
}

fn default_discount_rate() -> Decimal {
    dec!(100)
}

impl MediaResource {
    pub fn validate(&self) -> Result<()> {
        if self.list_price < Decimal::ZERO {
            return Err(EngineError::validation(format!(
                "media {} has negative list price {}",
                self.id, self.list_price
            )));
        }
        if self.discount_rate < Decimal::ZERO || self.discount_rate > dec!(100) {
            return Err(EngineError::validation(format!(
                "media {} discount rate {} outside 0-100",
                self.id, self.discount_rate
            )));
        }
        if let Some(cost) = self.actual_cost {
            if cost < Decimal::ZERO {
                return Err(EngineError::validation(format!(
                    "media {} has negative actual cost {}",
                    self.id, cost
                )));
            }
        }
        Ok(())
    }

    /// Actual cost when recorded, otherwise list price after discount
    pub fn effective_cost(&self) -> Decimal {
        self.actual_cost
            .unwrap_or_else(|| self.list_price * self.discount_rate / dec!(100))
    }
}

/// Quality tier of a resale channel, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChannelTier {
    /// Group-buy leaders
    #[serde(rename = "S")]
    TopTier,
    /// Wholesale markets
    #[serde(rename = "A")]
    Wholesale,
    #[serde(rename = "B")]
    Retail,
    #[serde(rename = "C")]
    Micro,
    #[serde(rename = "e_commerce")]
    ECommerce,
    #[serde(rename = "other")]
    Other,
}

impl ChannelTier {
    /// Vetted tiers with reliable settlement
    pub fn is_certified(&self) -> bool {
        matches!(self, ChannelTier::TopTier | ChannelTier::Wholesale)
    }
}

impl std::fmt::Display for ChannelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelTier::TopTier => write!(f, "S"),
            ChannelTier::Wholesale => write!(f, "A"),
            ChannelTier::Retail => write!(f, "B"),
            ChannelTier::Micro => write!(f, "C"),
            ChannelTier::ECommerce => write!(f, "e_commerce"),
            ChannelTier::Other => write!(f, "other"),
        }
    }
}

/// Resale channel the goods would move through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesChannel {
    pub id: String,
    pub name: String,
    pub tier: ChannelTier,
    /// Commission as a percentage of revenue (0-100)
    #[serde(default)]
    pub commission_rate: Decimal,
    #[serde(default)]
    pub settlement_terms: Option<String>,
}

impl SalesChannel {
    pub fn validate(&self) -> Result<()> {
        if self.commission_rate < Decimal::ZERO || self.commission_rate > dec!(100) {
            return Err(EngineError::validation(format!(
                "channel {} commission rate {} outside 0-100",
                self.id, self.commission_rate
            )));
        }
        Ok(())
    }
}

/// One day of completed transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTransactionSummary {
    pub date: NaiveDate,
    pub transaction_count: u32,
    pub revenue: Decimal,
    pub profit: Decimal,
}

/// Aggregate of inventory still awaiting a decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingInventory {
    pub item_count: u32,
    pub total_value: Decimal,
}

/// Three-tier risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Round a currency amount to cents
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Round a ratio to four decimal places
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> InventoryItem {
        InventoryItem {
            id: "inv-1".to_string(),
            brand_id: "brand-1".to_string(),
            product_name: "Sparkling Water 12-pack".to_string(),
            category: Category::Beverage,
            quantity: 100,
            original_value: dec!(10000),
            market_value: None,
            expiry_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            status: InventoryStatus::Pending,
        }
    }

    #[test]
    fn test_months_until_expiry() {
        let item = sample_item();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(item.days_until_expiry(today), Some(30));
        assert_eq!(item.months_until_expiry(today), Some(dec!(1)));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut item = sample_item();
        item.quantity = 0;
        assert!(matches!(item.validate(), Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_negative_value_rejected() {
        let mut item = sample_item();
        item.original_value = dec!(-1);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_media_effective_cost() {
        let mut media = MediaResource {
            id: "m-1".to_string(),
            name: "Lobby screens".to_string(),
            list_price: dec!(50000),
            discount_rate: dec!(40),
            actual_cost: None,
            status: MediaStatus::Idle,
        };
        assert_eq!(media.effective_cost(), dec!(20000));

        media.actual_cost = Some(dec!(18000));
        assert_eq!(media.effective_cost(), dec!(18000));
    }

    #[test]
    fn test_media_validation() {
        let mut media = MediaResource {
            id: "m-1".to_string(),
            name: "Lobby screens".to_string(),
            list_price: dec!(50000),
            discount_rate: dec!(100),
            actual_cost: None,
            status: MediaStatus::Idle,
        };
        assert!(media.validate().is_ok());

        media.discount_rate = dec!(150);
        assert!(matches!(media.validate(), Err(EngineError::Validation(_))));

        media.discount_rate = dec!(40);
        media.list_price = dec!(-1);
        assert!(media.validate().is_err());

        media.list_price = dec!(50000);
        media.actual_cost = Some(dec!(-10));
        assert!(media.validate().is_err());
    }

    #[test]
    fn test_channel_tier_serde() {
        let tier: ChannelTier = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(tier, ChannelTier::TopTier);
        assert!(tier.is_certified());
        assert!(!ChannelTier::ECommerce.is_certified());
        assert!(ChannelTier::TopTier < ChannelTier::Micro);
    }

    #[test]
    fn test_commission_out_of_range() {
        let channel = SalesChannel {
            id: "c-1".to_string(),
            name: "Bad channel".to_string(),
            tier: ChannelTier::Retail,
            commission_rate: dec!(120),
            settlement_terms: None,
        };
        assert!(channel.validate().is_err());
    }

    #[test]
    fn test_brand_default_reputation() {
        let brand: BrandRef = serde_json::from_str(r#"{"id": "b", "name": "Acme"}"#).unwrap();
        assert_eq!(brand.reputation_score, 5);
        assert!(brand.validate().is_ok());
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_ratio(dec!(0.105649)), dec!(0.1056));
    }
}
