use async_trait::async_trait;
use rust_decimal::Decimal;

use super::types::PriceSourceKind;
use crate::common::errors::Result;

/// One third-party reference market
///
/// Implementations may block on the network; the adapter bounds every call
/// with a timeout and treats failure as "price absent". Retries, if any,
/// belong inside the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Which market this source represents
    fn kind(&self) -> PriceSourceKind;

    /// Unit price for a product name, `None` when the market has no listing
    async fn lookup(&self, product_name: &str) -> Result<Option<Decimal>>;
}

/// Boxed price source for dynamic dispatch
pub type BoxedPriceSource = Box<dyn PriceSource>;
