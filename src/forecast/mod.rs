//! Profit Forecast Projector
//!
//! Extrapolates recent daily throughput plus a share of pending inventory
//! into a multi-period profit outlook.

mod projector;
mod types;

pub use projector::ProfitForecaster;
pub use types::{ForecastInput, ForecastResult, PeriodForecast};
