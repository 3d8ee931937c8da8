//! Fixed-ratio exponential projection over the ledger's current contents.

use serde::Serialize;

use crate::error::{GridbookError, Result};
use crate::record::Record;

/// Year-over-year growth applied to the base value.
pub const GROWTH_RATIO: f64 = 1.05;
/// Base demand used when the ledger holds no records at all.
pub const DEFAULT_BASE_GWH: f64 = 500.0;
/// Largest horizon a caller may request.
pub const MAX_HORIZON_YEARS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub forecast_gwh: f64,
}

/// The demand figure of the most recent record, or the fixed default for an
/// empty ledger. Among records sharing the maximum date the highest id wins,
/// so the selection does not depend on map iteration order.
pub fn base_value(records: &[Record]) -> f64 {
    records
        .iter()
        .max_by(|a, b| a.date().cmp(&b.date()).then(a.id().cmp(&b.id())))
        .map(|r| r.demand_gwh())
        .unwrap_or(DEFAULT_BASE_GWH)
}

/// Projects demand for `1..=horizon_years` years past `from_year`.
///
/// Pure over its inputs: the ledger snapshot is read, never written, and the
/// caller supplies the year the projection counts from. A horizon of zero
/// yields an empty sequence; anything outside `[0, 5]` is rejected.
pub fn project(
    records: &[Record],
    horizon_years: i64,
    from_year: i32,
) -> Result<Vec<ForecastPoint>> {
    if !(0..=MAX_HORIZON_YEARS).contains(&horizon_years) {
        return Err(GridbookError::InvalidHorizon {
            years: horizon_years,
        });
    }
    let base = base_value(records);
    Ok((1..=horizon_years)
        .map(|i| ForecastPoint {
            year: from_year + i as i32,
            forecast_gwh: round_tenth(base * GROWTH_RATIO.powi(i as i32)),
        })
        .collect())
}

// round to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
