//! Record types as entered by the user

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::format_thousands;

/// Asset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// Cash and deposits
    #[default]
    Cash,
    /// Stocks and funds
    Stock,
    RealEstate,
    Other,
}

/// Something owned today (deposit, brokerage account, property)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,

    /// Current value, may be negative for liabilities
    pub amount: i64,

    /// Expected annual return in percent (e.g. 2.0 = 2%)
    /// Recorded for reference only; the projection uses the global return rate.
    #[serde(default = "default_asset_interest_rate")]
    pub interest_rate: f64,

    #[serde(rename = "type", default)]
    pub asset_type: AssetType,
}

fn default_asset_interest_rate() -> f64 { 2.0 }

impl Asset {
    pub fn new(name: impl Into<String>, amount: i64, asset_type: AssetType) -> Self {
        Self {
            name: name.into(),
            amount,
            interest_rate: default_asset_interest_rate(),
            asset_type,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, format_thousands(self.amount))
    }
}

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFinancial {
    #[serde(default = "default_year")]
    pub year: i32,

    /// Calendar month, 1-12
    #[serde(default = "default_month")]
    pub month: u32,

    pub total_income: i64,
    pub total_expense: i64,
}

fn default_year() -> i32 { 2026 }
fn default_month() -> u32 { 1 }

impl MonthlyFinancial {
    pub fn new(year: i32, month: u32, total_income: i64, total_expense: i64) -> Self {
        Self { year, month, total_income, total_expense }
    }

    /// Income minus expense for the month
    pub fn net_balance(&self) -> i64 {
        self.total_income - self.total_expense
    }

    /// Net balance extrapolated over twelve months
    pub fn yearly_savings(&self) -> i64 {
        self.net_balance() * 12
    }
}

impl fmt::Display for MonthlyFinancial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Whether a goal is a single purchase or a yearly commitment.
///
/// Descriptive only: the projection charges `cost` in every year of the
/// goal's window regardless of type, so one-time goals use a duration of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    /// House down payment, car
    #[default]
    OneTime,
    /// Travel, parents' support, medical budget
    Recurring,
}

/// A planned expense charged in each year of `[start_year, start_year + duration_years)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeGoal {
    pub name: String,

    /// Amount charged per active year
    pub cost: i64,

    #[serde(default = "default_year")]
    pub start_year: i32,

    #[serde(default = "default_duration_years")]
    pub duration_years: u32,

    #[serde(rename = "type", default)]
    pub goal_type: GoalType,
}

fn default_duration_years() -> u32 { 1 }

impl LifeGoal {
    /// Single expense in one year
    pub fn one_time(name: impl Into<String>, cost: i64, year: i32) -> Self {
        Self {
            name: name.into(),
            cost,
            start_year: year,
            duration_years: 1,
            goal_type: GoalType::OneTime,
        }
    }

    /// Yearly expense for `duration_years` consecutive years
    pub fn recurring(name: impl Into<String>, cost: i64, start_year: i32, duration_years: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            start_year,
            duration_years,
            goal_type: GoalType::Recurring,
        }
    }

    /// First year after the window closes
    pub fn end_year(&self) -> i64 {
        self.start_year as i64 + self.duration_years as i64
    }
}

impl fmt::Display for LifeGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration_years > 1 {
            write!(
                f,
                "{} - ${}/year from {} for {} years",
                self.name,
                format_thousands(self.cost),
                self.start_year,
                self.duration_years
            )
        } else {
            write!(f, "{} - ${} in {}", self.name, format_thousands(self.cost), self.start_year)
        }
    }
}

/// Global simulation parameters, stored as percentages (5.0 = 5%)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Expected annual inflation in percent
    /// Stored and displayed, not applied to goal costs.
    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Expected annual investment return in percent
    #[serde(default = "default_return_rate")]
    pub return_rate: f64,
}

fn default_inflation_rate() -> f64 { 2.0 }
fn default_return_rate() -> f64 { 5.0 }

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            inflation_rate: default_inflation_rate(),
            return_rate: default_return_rate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_savings() {
        let monthly = MonthlyFinancial::new(2026, 1, 80_000, 60_000);
        assert_eq!(monthly.net_balance(), 20_000);
        assert_eq!(monthly.yearly_savings(), 240_000);

        let overspent = MonthlyFinancial::new(2026, 2, 50_000, 60_000);
        assert_eq!(overspent.yearly_savings(), -120_000);
    }

    #[test]
    fn test_display() {
        let asset = Asset::new("Brokerage", 1_250_000, AssetType::Stock);
        assert_eq!(asset.to_string(), "Brokerage - $1,250,000");

        let house = LifeGoal::one_time("House", 500_000, 2030);
        assert_eq!(house.to_string(), "House - $500,000 in 2030");

        let tuition = LifeGoal::recurring("Tuition", 120_000, 2040, 4);
        assert_eq!(tuition.to_string(), "Tuition - $120,000/year from 2040 for 4 years");

        assert_eq!(MonthlyFinancial::new(2026, 3, 1, 0).to_string(), "2026-03");
    }

    #[test]
    fn test_settings_defaults() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.inflation_rate, 2.0);
        assert_eq!(settings.return_rate, 5.0);

        // Missing fields fall back to the same defaults
        let parsed: SimulationSettings = serde_json::from_str(r#"{"return_rate": 7.5}"#).unwrap();
        assert_eq!(parsed.inflation_rate, 2.0);
        assert_eq!(parsed.return_rate, 7.5);
    }

    #[test]
    fn test_enum_names() {
        let goal: LifeGoal = serde_json::from_str(
            r#"{"name": "Travel", "cost": 30000, "start_year": 2027, "duration_years": 10, "type": "RECURRING"}"#,
        )
        .unwrap();
        assert_eq!(goal.goal_type, GoalType::Recurring);
        assert_eq!(goal.end_year(), 2037);

        let json = serde_json::to_string(&Asset::new("Flat", 3_000_000, AssetType::RealEstate)).unwrap();
        assert!(json.contains(r#""type":"REAL_ESTATE""#));
    }
}
