//! Fixed-table price source
//!
//! Answers lookups from an in-process keyword table. Used for offline runs and
//! as a deterministic fixture in tests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::source::PriceSource;
use super::types::PriceSourceKind;
use crate::common::errors::Result;

/// Price source backed by a keyword -> unit price table
#[derive(Debug, Clone)]
pub struct CatalogPriceSource {
    kind: PriceSourceKind,
    entries: Vec<(String, Decimal)>,
}

impl CatalogPriceSource {
    pub fn new(kind: PriceSourceKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Add a keyword; first matching keyword wins
    pub fn with_entry(mut self, keyword: impl Into<String>, price: Decimal) -> Self {
        self.entries.push((keyword.into().to_lowercase(), price));
        self
    }

    /// Typical discount-retail prices for common barter goods
    pub fn retail_defaults() -> Self {
        Self::new(PriceSourceKind::Retail)
            .with_entry("coca-cola", dec!(35.9))
            .with_entry("genki forest", dec!(45.8))
            .with_entry("laundry detergent", dec!(29.9))
            .with_entry("instant noodles", dec!(12.5))
            .with_entry("nut gift box", dec!(89.0))
            .with_entry("tissues", dec!(22.9))
            .with_entry("power bank", dec!(59.0))
            .with_entry("rice cooker", dec!(199.0))
    }

    /// Second-hand prices, usually below retail
    pub fn secondhand_defaults() -> Self {
        Self::new(PriceSourceKind::Secondhand)
            .with_entry("coca-cola", dec!(28.0))
            .with_entry("genki forest", dec!(38.0))
            .with_entry("laundry detergent", dec!(25.0))
            .with_entry("instant noodles", dec!(10.0))
            .with_entry("nut gift box", dec!(75.0))
            .with_entry("tissues", dec!(18.0))
            .with_entry("power bank", dec!(45.0))
            .with_entry("rice cooker", dec!(150.0))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PriceSource for CatalogPriceSource {
    fn kind(&self) -> PriceSourceKind {
        self.kind
    }

    async fn lookup(&self, product_name: &str) -> Result<Option<Decimal>> {
        let name = product_name.to_lowercase();
        Ok(self
            .entries
            .iter()
            .find(|(keyword, _)| name.contains(keyword.as_str()))
            .map(|(_, price)| *price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_match_is_case_insensitive() {
        let source = CatalogPriceSource::secondhand_defaults();
        let price = source.lookup("Coca-Cola Classic 24 cans").await.unwrap();
        assert_eq!(price, Some(dec!(28.0)));
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let source = CatalogPriceSource::retail_defaults();
        assert_eq!(source.len(), 8);
        assert_eq!(source.lookup("Beauty card").await.unwrap(), None);
    }
}
