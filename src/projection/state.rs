//! Running state carried from one projected year to the next

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::cashflows::{ProjectionRow, NO_EVENTS};
use super::inputs::ProjectionInputs;

/// Year, age and exact wealth at the start of the next projected year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    pub year: i32,
    pub age: u32,
    pub wealth: Decimal,
}

impl ProjectionState {
    pub fn new(start_year: i32, start_age: u32, initial_wealth: i64) -> Self {
        Self {
            year: start_year,
            age: start_age,
            wealth: Decimal::from(initial_wealth),
        }
    }

    /// Project one year and move to the next.
    ///
    /// Growth is computed on the balance carried in from the prior year,
    /// before this year's savings and goal costs are applied.
    pub fn advance(&mut self, inputs: &ProjectionInputs) -> ProjectionRow {
        let investment_income = self.wealth.saturating_mul(inputs.assumptions.return_rate);
        let mut net_change = investment_income.saturating_add(Decimal::from(inputs.yearly_savings));

        let mut goal_expense = Decimal::ZERO;
        let mut active_goals = Vec::new();
        for goal in inputs.goals.iter().filter(|goal| goal.is_active(self.year)) {
            goal_expense = goal_expense.saturating_add(Decimal::from(goal.cost));
            active_goals.push(goal.name.clone());
        }

        net_change = net_change.saturating_sub(goal_expense);
        self.wealth = self.wealth.saturating_add(net_change);

        let events = if active_goals.is_empty() {
            NO_EVENTS.to_string()
        } else {
            active_goals.join(", ")
        };

        let row = ProjectionRow {
            year: self.year,
            age: self.age,
            active_goals,
            events,
            goal_expense: truncate(goal_expense),
            net_change: truncate(net_change),
            wealth: truncate(self.wealth),
            is_negative: self.wealth < Decimal::ZERO,
        };

        self.year += 1;
        self.age += 1;
        row
    }
}

/// Drop the fractional part, saturating at the i64 range
fn truncate(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() { i64::MIN } else { i64::MAX })
}
