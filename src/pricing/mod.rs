//! Price Source Adapter
//!
//! Third-party reference prices for a product name, from two independent
//! markets. Sources are injected, so tests and offline runs can swap in
//! fixed tables.

mod adapter;
mod catalog;
mod source;
mod types;

pub use adapter::PriceSourceAdapter;
pub use catalog::CatalogPriceSource;
pub use source::{BoxedPriceSource, PriceSource};
pub use types::{PriceQuote, PriceSourceKind};

#[cfg(test)]
pub use source::MockPriceSource;
