use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which independent reference market a price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSourceKind {
    /// Discount retail marketplace
    Retail,
    /// Second-hand marketplace
    Secondhand,
}

impl std::fmt::Display for PriceSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSourceKind::Retail => write!(f, "retail"),
            PriceSourceKind::Secondhand => write!(f, "secondhand"),
        }
    }
}

/// Reference prices gathered for one product, plus what went wrong
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub retail: Option<Decimal>,
    pub secondhand: Option<Decimal>,
    /// Sources that failed or timed out, with the reason
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unavailable: Vec<String>,
}

impl PriceQuote {
    pub fn new(retail: Option<Decimal>, secondhand: Option<Decimal>) -> Self {
        Self {
            retail,
            secondhand,
            unavailable: Vec::new(),
        }
    }

    fn prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.retail.iter().chain(self.secondhand.iter()).copied()
    }

    /// Cheaper of the known prices
    pub fn lower(&self) -> Option<Decimal> {
        self.prices().min()
    }

    /// Dearer of the known prices
    pub fn higher(&self) -> Option<Decimal> {
        self.prices().max()
    }

    pub fn has_both(&self) -> bool {
        self.retail.is_some() && self.secondhand.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.retail.is_none() && self.secondhand.is_none()
    }

    /// True when at least one source could not answer
    pub fn is_degraded(&self) -> bool {
        !self.unavailable.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lower_and_higher() {
        let quote = PriceQuote::new(Some(dec!(35.9)), Some(dec!(28.0)));
        assert_eq!(quote.lower(), Some(dec!(28.0)));
        assert_eq!(quote.higher(), Some(dec!(35.9)));
        assert!(quote.has_both());
    }

    #[test]
    fn test_single_price() {
        let quote = PriceQuote::new(Some(dec!(59)), None);
        assert_eq!(quote.lower(), Some(dec!(59)));
        assert_eq!(quote.higher(), Some(dec!(59)));
        assert!(!quote.has_both());
        assert!(!quote.is_empty());
    }
}
