//! Data-entry validation
//!
//! Every record passes through here before it is stored, whether it comes from
//! a create/update call or from a data file. The projection can then assume
//! well-formed input.

use chrono::NaiveDate;

use super::{Asset, LifeGoal, MonthlyFinancial, SimulationSettings};
use crate::error::{Error, Result};

/// Longest accepted record name
pub const MAX_NAME_LEN: usize = 50;

/// Accepted range for any stored money amount, in whole currency units
pub const MIN_AMOUNT: i64 = i32::MIN as i64;
pub const MAX_AMOUNT: i64 = i32::MAX as i64;

/// Checks applied to a record at the data-entry boundary
pub trait Validate {
    /// Record kind used in error messages
    const KIND: &'static str;

    fn validate(&self) -> Result<()>;
}

fn check_name(kind: &'static str, name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid(kind, "name must not be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(Error::invalid(
            kind,
            format!("name '{}' is longer than {} characters", trimmed, MAX_NAME_LEN),
        ));
    }
    Ok(())
}

fn check_amount(kind: &'static str, field: &str, value: i64) -> Result<()> {
    if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&value) {
        return Err(Error::invalid(
            kind,
            format!("{} {} is outside {}..={}", field, value, MIN_AMOUNT, MAX_AMOUNT),
        ));
    }
    Ok(())
}

fn check_percentage(kind: &'static str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid(kind, format!("{} must be a finite percentage", field)));
    }
    Ok(())
}

impl Validate for Asset {
    const KIND: &'static str = "asset";

    fn validate(&self) -> Result<()> {
        check_name(Self::KIND, &self.name)?;
        check_amount(Self::KIND, "amount", self.amount)?;
        check_percentage(Self::KIND, "interest_rate", self.interest_rate)
    }
}

impl Validate for MonthlyFinancial {
    const KIND: &'static str = "monthly financial";

    fn validate(&self) -> Result<()> {
        if NaiveDate::from_ymd_opt(self.year, self.month, 1).is_none() {
            return Err(Error::invalid(
                Self::KIND,
                format!("{}-{} is not a calendar month", self.year, self.month),
            ));
        }
        if self.total_income < 0 || self.total_expense < 0 {
            return Err(Error::invalid(Self::KIND, "income and expense totals must not be negative"));
        }
        check_amount(Self::KIND, "total_income", self.total_income)?;
        check_amount(Self::KIND, "total_expense", self.total_expense)
    }
}

impl Validate for LifeGoal {
    const KIND: &'static str = "life goal";

    fn validate(&self) -> Result<()> {
        check_name(Self::KIND, &self.name)?;
        check_amount(Self::KIND, "cost", self.cost)?;
        if self.duration_years < 1 {
            return Err(Error::invalid(Self::KIND, "duration_years must be at least 1"));
        }
        Ok(())
    }
}

impl Validate for SimulationSettings {
    const KIND: &'static str = "simulation settings";

    fn validate(&self) -> Result<()> {
        check_percentage(Self::KIND, "inflation_rate", self.inflation_rate)?;
        check_percentage(Self::KIND, "return_rate", self.return_rate)
    }
}
