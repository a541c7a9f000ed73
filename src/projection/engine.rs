//! Yearly wealth projection

use chrono::Datelike;
use log::debug;
use serde::{Deserialize, Serialize};

use super::cashflows::ProjectionResult;
use super::inputs::ProjectionInputs;
use super::state::ProjectionState;
use super::{DEFAULT_PROJECTION_YEARS, DEFAULT_START_AGE, MAX_PROJECTION_YEARS};
use crate::error::{Error, Result};

/// Horizon of a projection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// First projected calendar year (default: current year)
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Age during the first projected year
    #[serde(default = "default_start_age")]
    pub start_age: u32,

    /// Number of projected years, one row each
    #[serde(default = "default_num_years")]
    pub num_years: u32,
}

fn default_start_year() -> i32 { chrono::Local::now().year() }
fn default_start_age() -> u32 { DEFAULT_START_AGE }
fn default_num_years() -> u32 { DEFAULT_PROJECTION_YEARS }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            start_age: default_start_age(),
            num_years: default_num_years(),
        }
    }
}

impl ProjectionConfig {
    pub fn new(start_year: i32, start_age: u32, num_years: u32) -> Self {
        Self { start_year, start_age, num_years }
    }

    /// Reject horizons the engine does not accept
    pub fn validate(&self) -> Result<()> {
        if self.num_years == 0 {
            return Err(Error::InvalidConfig("num_years must be at least 1".to_string()));
        }
        if self.num_years > MAX_PROJECTION_YEARS {
            return Err(Error::InvalidConfig(format!(
                "num_years {} exceeds the maximum of {}",
                self.num_years, MAX_PROJECTION_YEARS
            )));
        }
        if self.start_year.checked_add(self.num_years as i32).is_none()
            || self.start_age.checked_add(self.num_years).is_none()
        {
            return Err(Error::InvalidConfig("projection horizon overflows".to_string()));
        }
        Ok(())
    }

    /// Last projected calendar year. Only meaningful for a validated config.
    pub fn end_year(&self) -> i32 {
        self.start_year + self.num_years as i32 - 1
    }
}

/// Runs the projection for a fixed horizon.
///
/// Pure: no I/O, no shared state. One engine can serve any number of
/// projections, including from several threads at once.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// The config must have passed [`ProjectionConfig::validate`]
    pub fn new(config: ProjectionConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated projection config {:?}", config);
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project `num_years` consecutive years starting at `start_year`
    pub fn project(&self, inputs: &ProjectionInputs) -> ProjectionResult {
        let mut state = ProjectionState::new(
            self.config.start_year,
            self.config.start_age,
            inputs.initial_wealth,
        );

        let rows: Vec<_> = (0..self.config.num_years)
            .map(|_| state.advance(inputs))
            .collect();

        debug!(
            "projected {} years from {}, final wealth {}",
            rows.len(),
            self.config.start_year,
            state.wealth
        );

        ProjectionResult { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::GoalWindow;
    use rust_decimal::Decimal;

    fn five_percent() -> Decimal {
        Decimal::new(5, 2)
    }

    fn engine(num_years: u32) -> ProjectionEngine {
        ProjectionEngine::new(ProjectionConfig::new(2026, 35, num_years))
    }

    #[test]
    fn test_single_year_no_goals() {
        let inputs = ProjectionInputs::new(1_000_000, 200_000, Vec::new(), five_percent());
        let result = engine(1).project(&inputs);

        assert_eq!(result.len(), 1);
        let row = &result.rows[0];
        assert_eq!(row.year, 2026);
        assert_eq!(row.age, 35);
        assert_eq!(row.events, "-");
        assert!(row.active_goals.is_empty());
        assert_eq!(row.net_change, 250_000);
        assert_eq!(row.wealth, 1_250_000);
        assert!(!row.is_negative);
    }

    #[test]
    fn test_single_year_with_house() {
        let goals = vec![GoalWindow::new("House", 500_000, 2026, 1)];
        let inputs = ProjectionInputs::new(1_000_000, 200_000, goals, five_percent());
        let result = engine(1).project(&inputs);
        let row = &result.rows[0];

        assert_eq!(row.net_change, -250_000);
        assert_eq!(row.wealth, 750_000);
        assert_eq!(row.events, "House");
        assert!(!row.is_negative);
    }

    #[test]
    fn test_overspending_compounds_debt() {
        let inputs = ProjectionInputs::new(0, -100_000, Vec::new(), five_percent());
        let result = engine(3).project(&inputs);

        assert_eq!(result.chart_wealth(), vec![-100_000, -205_000, -315_250]);
        assert!(result.rows.iter().all(|row| row.is_negative));
        assert_eq!(result.first_negative_year(), Some(2026));
        assert_eq!(result.min_wealth(), Some(-315_250));
    }

    #[test]
    fn test_recurring_goal_window() {
        let goals = vec![GoalWindow::new("Travel", 50_000, 2027, 3)];
        let inputs = ProjectionInputs::new(0, 0, goals, five_percent());
        let result = engine(5).project(&inputs);

        let charged: Vec<_> = result.rows.iter().map(|row| (row.year, row.goal_expense)).collect();
        assert_eq!(
            charged,
            vec![(2026, 0), (2027, 50_000), (2028, 50_000), (2029, 50_000), (2030, 0)]
        );
        assert_eq!(result.rows[0].events, "-");
        assert_eq!(result.rows[4].events, "-");
        assert!(result.rows[1..4].iter().all(|row| row.events == "Travel"));
    }

    #[test]
    fn test_years_ages_and_recurrence() {
        let goals = vec![
            GoalWindow::new("Car", 800_000, 2030, 1),
            GoalWindow::new("Parents", 120_000, 2028, 10),
            GoalWindow::new("Tuition", 200_000, 2040, 4),
        ];
        let inputs = ProjectionInputs::new(2_345_678, 333_333, goals, Decimal::new(37, 3));
        let result = engine(40).project(&inputs);

        assert_eq!(result.len(), 40);
        assert_eq!(result.chart_years(), (2026..2066).collect::<Vec<_>>());
        let mut previous = inputs.initial_wealth;
        for (i, row) in result.rows.iter().enumerate() {
            assert_eq!(row.year, 2026 + i as i32);
            assert_eq!(row.age, 35 + i as u32);
            // Truncation can shift the running total by at most one unit either way
            assert!((previous + row.net_change - row.wealth).abs() <= 1, "year {}", row.year);
            if row.wealth < 0 {
                assert!(row.is_negative);
            } else if row.wealth > 0 {
                assert!(!row.is_negative);
            }
            let expected: i64 = inputs.goals.iter().filter(|g| g.is_active(row.year)).map(|g| g.cost).sum();
            assert_eq!(row.goal_expense, expected);
            previous = row.wealth;
        }
    }

    #[test]
    fn test_projection_is_repeatable() {
        let goals = vec![GoalWindow::new("Boat", 75_000, 2030, 2)];
        let inputs = ProjectionInputs::new(500_000, 12_345, goals, Decimal::new(63, 3));
        let engine = engine(30);
        assert_eq!(engine.project(&inputs), engine.project(&inputs));
    }

    #[test]
    fn test_config_validation() {
        assert!(ProjectionConfig::new(2026, 35, 40).validate().is_ok());
        assert!(matches!(ProjectionConfig::new(2026, 35, 0).validate(), Err(Error::InvalidConfig(_))));
        assert!(ProjectionConfig::new(2026, 35, MAX_PROJECTION_YEARS + 1).validate().is_err());
        assert!(ProjectionConfig::new(i32::MAX - 5, 35, 40).validate().is_err());
        assert_eq!(ProjectionConfig::new(2026, 35, 40).end_year(), 2065);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unvalidated projection config")]
    fn test_engine_rejects_unvalidated_config() {
        ProjectionEngine::new(ProjectionConfig::new(i32::MAX, 35, 2));
    }

    #[test]
    fn test_engine_at_latest_start_year() {
        let config = ProjectionConfig::new(i32::MAX - 3, 35, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.end_year(), i32::MAX - 1);

        let inputs = ProjectionInputs::new(100, 0, Vec::new(), five_percent());
        let result = ProjectionEngine::new(config).project(&inputs);
        assert_eq!(result.chart_years(), vec![i32::MAX - 3, i32::MAX - 2, i32::MAX - 1]);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: ProjectionConfig = serde_json::from_str(r#"{"start_year": 2030}"#).unwrap();
        assert_eq!(config.start_year, 2030);
        assert_eq!(config.start_age, DEFAULT_START_AGE);
        assert_eq!(config.num_years, DEFAULT_PROJECTION_YEARS);
    }
}
