//! Rate assumptions for the projection
//!
//! Settings are stored as percentages (5.0 means 5%). This is the one place
//! they are turned into fractions; everything downstream of here works in
//! fractions only.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::records::SimulationSettings;

/// Convert a stored percentage into an exact fraction (5.0 -> 0.05)
pub fn percent_to_fraction(name: &'static str, percent: f64) -> Result<Decimal> {
    if !percent.is_finite() {
        return Err(Error::InvalidRate { name, value: percent });
    }
    let value = Decimal::from_f64(percent).ok_or(Error::InvalidRate { name, value: percent })?;
    Ok(value / Decimal::ONE_HUNDRED)
}

/// Annual rates as fractions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assumptions {
    /// Investment return applied to the running balance each year
    pub return_rate: Decimal,

    /// Carried alongside the return rate; goal costs stay nominal
    pub inflation_rate: Decimal,
}

impl Assumptions {
    pub fn from_settings(settings: &SimulationSettings) -> Result<Self> {
        Ok(Self {
            return_rate: percent_to_fraction("return", settings.return_rate)?,
            inflation_rate: percent_to_fraction("inflation", settings.inflation_rate)?,
        })
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        // 5% return, 2% inflation
        Self {
            return_rate: Decimal::new(5, 2),
            inflation_rate: Decimal::new(2, 2),
        }
    }
}
