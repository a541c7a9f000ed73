//! Input snapshot for a projection run
//!
//! Everything the engine needs is read from the store once, up front, into
//! plain values. The engine never sees the store.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::assumptions::Assumptions;
use crate::error::{Error, Result};
use crate::records::{total_asset_amount, LifeGoal, RecordStore};

/// What to do when no monthly income/expense record exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingMonthlyPolicy {
    /// Report an error; used where a partial picture would mislead (printed reports)
    Fail,
    /// Treat yearly savings as zero and carry on (interactive dashboard)
    AssumeZero,
}

/// A goal's cost and the half-open window of years it is charged in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalWindow {
    pub name: String,
    pub cost: i64,
    pub start_year: i32,
    pub duration_years: u32,
}

impl GoalWindow {
    pub fn new(name: impl Into<String>, cost: i64, start_year: i32, duration_years: u32) -> Self {
        Self { name: name.into(), cost, start_year, duration_years }
    }

    /// True for `start_year <= year < start_year + duration_years`
    pub fn is_active(&self, year: i32) -> bool {
        let year = year as i64;
        let start = self.start_year as i64;
        start <= year && year < start + self.duration_years as i64
    }
}

impl From<&LifeGoal> for GoalWindow {
    fn from(goal: &LifeGoal) -> Self {
        Self::new(goal.name.clone(), goal.cost, goal.start_year, goal.duration_years)
    }
}

/// Plain-value inputs to [`ProjectionEngine::project`](super::ProjectionEngine::project)
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInputs {
    /// Sum of all asset amounts
    pub initial_wealth: i64,

    /// Monthly net balance x 12, constant over the horizon
    pub yearly_savings: i64,

    pub goals: Vec<GoalWindow>,

    /// Rates as fractions
    pub assumptions: Assumptions,
}

impl ProjectionInputs {
    /// Build inputs directly; `return_rate` is a fraction (0.05 for 5%)
    pub fn new(initial_wealth: i64, yearly_savings: i64, goals: Vec<GoalWindow>, return_rate: Decimal) -> Self {
        Self {
            initial_wealth,
            yearly_savings,
            goals,
            assumptions: Assumptions { return_rate, ..Assumptions::default() },
        }
    }

    /// Read a consistent snapshot from the store.
    ///
    /// Settings are materialized with defaults if they have never been saved.
    pub fn gather(store: &mut dyn RecordStore, policy: MissingMonthlyPolicy) -> Result<Self> {
        let yearly_savings = match store.monthly().first() {
            Some(monthly) => monthly.yearly_savings(),
            None => match policy {
                MissingMonthlyPolicy::Fail => return Err(Error::MissingMonthlyFinancial),
                MissingMonthlyPolicy::AssumeZero => {
                    warn!("no monthly financial record, assuming zero yearly savings");
                    0
                }
            },
        };

        let initial_wealth = total_asset_amount(store.assets());
        let goals: Vec<GoalWindow> = store.goals().list().into_iter().map(|(_, goal)| goal.into()).collect();
        let assumptions = Assumptions::from_settings(store.settings())?;

        debug!(
            "gathered inputs: wealth={}, savings={}, goals={}, return={}",
            initial_wealth,
            yearly_savings,
            goals.len(),
            assumptions.return_rate
        );

        Ok(Self { initial_wealth, yearly_savings, goals, assumptions })
    }

    /// Same inputs under a different return rate (fraction)
    pub fn with_return_rate(&self, return_rate: Decimal) -> Self {
        let mut inputs = self.clone();
        inputs.assumptions.return_rate = return_rate;
        inputs
    }
}
