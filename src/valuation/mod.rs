//! Realization Valuation Engine
//!
//! Combines third-party reference prices with brand, category, channel and
//! shelf-life attributes into a market value, a realization rate and a
//! recommended resale price.
//!
//! # Derivation
//!
//! ```text
//! reference prices ──► market value (cheaper source, else 30% of book value)
//!                  └─► recommended price (60% of second-hand, else 50% of retail)
//!
//! base rate 8% × channel × brand × category × expiry ──► clamp [5%, 15%]
//!
//! expected return = quantity × recommended price   (when a price is known)
//!                 = book value × band limit        (price-implied rate outside the band)
//!                 = book value × rate              (otherwise)
//! ```

mod adjustments;
mod engine;
mod price_risk;
mod summary;
mod types;

pub use adjustments::{
    brand_multiplier, category_multiplier, channel_multiplier, default_adjustments,
    expiry_multiplier, AppliedAdjustment, RateAdjustment, RateBreakdown, RateContext,
    RealizationRateModel,
};
pub use engine::ValuationEngine;
pub use price_risk::{rate_price_risk, PriceRisk};
pub use summary::ValuationSummary;
pub use types::{ReturnBasis, ValuationResult};
