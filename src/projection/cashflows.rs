//! Projection output rows and the collected result

use serde::Serialize;

/// Placeholder shown when no goal is charged in a year
pub const NO_EVENTS: &str = "-";

/// One projected year. Money columns are truncated toward zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionRow {
    pub year: i32,
    pub age: u32,

    /// Names of goals charged this year, in goal order
    pub active_goals: Vec<String>,

    /// Active goal names joined by ", ", or "-" when there are none
    pub events: String,

    /// Sum of the costs of active goals
    pub goal_expense: i64,

    /// Investment income + savings - goal expense
    pub net_change: i64,

    /// Cumulative wealth at year end
    pub wealth: i64,

    /// Wealth below zero; display emphasis only
    pub is_negative: bool,
}

/// Ordered rows for consecutive years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionResult {
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// X axis for a wealth chart
    pub fn chart_years(&self) -> Vec<i32> {
        self.rows.iter().map(|row| row.year).collect()
    }

    /// Y axis for a wealth chart, parallel to [`chart_years`](Self::chart_years)
    pub fn chart_wealth(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.wealth).collect()
    }

    pub fn final_wealth(&self) -> Option<i64> {
        self.rows.last().map(|row| row.wealth)
    }

    pub fn min_wealth(&self) -> Option<i64> {
        self.rows.iter().map(|row| row.wealth).min()
    }

    /// First year that ends with negative wealth
    pub fn first_negative_year(&self) -> Option<i32> {
        self.rows.iter().find(|row| row.is_negative).map(|row| row.year)
    }
}
