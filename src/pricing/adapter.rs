use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, warn};

use super::catalog::CatalogPriceSource;
use super::source::{BoxedPriceSource, PriceSource};
use super::types::{PriceQuote, PriceSourceKind};
use crate::common::errors::{EngineError, Result};
use crate::config::types::PricingConfig;

/// Queries the two reference markets for a product
///
/// Each source is bounded by its own timeout. A failed, timed-out or
/// nonsensical answer becomes an absent price recorded in
/// [`PriceQuote::unavailable`]; the lookup itself never fails.
pub struct PriceSourceAdapter {
    retail: Option<BoxedPriceSource>,
    secondhand: Option<BoxedPriceSource>,
    timeout: Duration,
}

impl PriceSourceAdapter {
    pub fn new(timeout: Duration) -> Self {
        Self {
            retail: None,
            secondhand: None,
            timeout,
        }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(Duration::from_millis(config.lookup_timeout_ms))
    }

    /// Adapter over the built-in catalog tables
    pub fn with_default_catalogs(config: &PricingConfig) -> Self {
        Self::from_config(config)
            .with_source(Box::new(CatalogPriceSource::retail_defaults()))
            .with_source(Box::new(CatalogPriceSource::secondhand_defaults()))
    }

    /// Install a source in the slot matching its kind
    pub fn with_source(mut self, source: BoxedPriceSource) -> Self {
        match source.kind() {
            PriceSourceKind::Retail => self.retail = Some(source),
            PriceSourceKind::Secondhand => self.secondhand = Some(source),
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn lookup(&self, product_name: &str) -> PriceQuote {
        let (retail, secondhand) = tokio::join!(
            self.query(self.retail.as_deref(), product_name),
            self.query(self.secondhand.as_deref(), product_name),
        );

        let mut unavailable = Vec::new();
        let quote = PriceQuote {
            retail: self.absorb(retail, &mut unavailable),
            secondhand: self.absorb(secondhand, &mut unavailable),
            unavailable,
        };

        debug!(
            product = product_name,
            retail = ?quote.retail,
            secondhand = ?quote.secondhand,
            "Reference prices resolved"
        );
        quote
    }

    async fn query(
        &self,
        source: Option<&dyn PriceSource>,
        product_name: &str,
    ) -> Result<Option<Decimal>> {
        let Some(source) = source else {
            return Ok(None);
        };
        let kind = source.kind();

        let price = tokio::time::timeout(self.timeout, source.lookup(product_name))
            .await
            .map_err(|_| {
                EngineError::source_unavailable(
                    kind.to_string(),
                    format!("timed out after {}ms", self.timeout.as_millis()),
                )
            })??;

        match price {
            Some(p) if p <= Decimal::ZERO => Err(EngineError::source_unavailable(
                kind.to_string(),
                format!("non-positive price {p}"),
            )),
            other => Ok(other),
        }
    }

    fn absorb(&self, result: Result<Option<Decimal>>, unavailable: &mut Vec<String>) -> Option<Decimal> {
        match result {
            Ok(price) => price,
            Err(e) => {
                warn!(error = %e, "Price source degraded, treating price as absent");
                unavailable.push(e.to_string());
                None
            }
        }
    }
}
