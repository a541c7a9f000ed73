//! Dashboard payload: the projection table plus chart series

use serde::Serialize;

use crate::error::Result;
use crate::projection::{
    MissingMonthlyPolicy, ProjectionConfig, ProjectionEngine, ProjectionInputs, ProjectionResult,
    ProjectionRow,
};
use crate::records::{RecordStore, SimulationSettings};

/// Everything the dashboard page shows, ready for JSON
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub report_data: Vec<ProjectionRow>,
    pub initial_wealth: i64,
    pub yearly_savings: i64,

    /// Chart x axis
    pub chart_years: Vec<i32>,
    /// Chart y axis, parallel to `chart_years`
    pub chart_wealth: Vec<i64>,

    pub settings: SimulationSettings,
    pub config: ProjectionConfig,
}

impl DashboardView {
    pub fn new(
        inputs: &ProjectionInputs,
        settings: SimulationSettings,
        config: ProjectionConfig,
        result: ProjectionResult,
    ) -> Self {
        Self {
            chart_years: result.chart_years(),
            chart_wealth: result.chart_wealth(),
            report_data: result.rows,
            initial_wealth: inputs.initial_wealth,
            yearly_savings: inputs.yearly_savings,
            settings,
            config,
        }
    }

    /// Project straight from a store the way the dashboard does: a missing
    /// monthly record means zero savings rather than an error.
    pub fn from_store(store: &mut dyn RecordStore, config: ProjectionConfig) -> Result<Self> {
        config.validate()?;
        let inputs = ProjectionInputs::gather(store, MissingMonthlyPolicy::AssumeZero)?;
        let settings = store.settings().clone();
        let result = ProjectionEngine::new(config.clone()).project(&inputs);
        Ok(Self::new(&inputs, settings, config, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::GoalWindow;
    use crate::records::{Asset, AssetType, MemoryStore};
    use rust_decimal::Decimal;

    #[test]
    fn test_chart_series_parallel() {
        let inputs = ProjectionInputs::new(100_000, 12_000, vec![GoalWindow::new("Car", 50_000, 2027, 1)], Decimal::new(5, 2));
        let config = ProjectionConfig::new(2026, 35, 3);
        let result = ProjectionEngine::new(config.clone()).project(&inputs);
        let view = DashboardView::new(&inputs, SimulationSettings::default(), config, result);

        assert_eq!(view.chart_years, vec![2026, 2027, 2028]);
        assert_eq!(view.chart_wealth.len(), view.report_data.len());
        for (row, wealth) in view.report_data.iter().zip(&view.chart_wealth) {
            assert_eq!(row.wealth, *wealth);
        }
    }

    #[test]
    fn test_json_shape() {
        let inputs = ProjectionInputs::new(1_000_000, 200_000, Vec::new(), Decimal::new(5, 2));
        let config = ProjectionConfig::new(2026, 35, 1);
        let result = ProjectionEngine::new(config.clone()).project(&inputs);
        let view = DashboardView::new(&inputs, SimulationSettings::default(), config, result);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["report_data"][0]["events"], "-");
        assert_eq!(json["report_data"][0]["wealth"], 1_250_000);
        assert_eq!(json["report_data"][0]["is_negative"], false);
        assert_eq!(json["chart_years"][0], 2026);
        assert_eq!(json["settings"]["return_rate"], 5.0);
        assert_eq!(json["yearly_savings"], 200_000);
    }

    #[test]
    fn test_from_store_without_monthly() {
        let mut store = MemoryStore::new();
        store.assets_mut().create(Asset::new("Savings", 1_000_000, AssetType::Cash)).unwrap();

        let view = DashboardView::from_store(&mut store, ProjectionConfig::new(2026, 35, 2)).unwrap();
        assert_eq!(view.yearly_savings, 0);
        assert_eq!(view.chart_wealth, vec![1_050_000, 1_102_500]);
        assert_eq!(view.settings, SimulationSettings::default());
    }

    #[test]
    fn test_from_store_rejects_empty_horizon() {
        let mut store = MemoryStore::new();
        assert!(DashboardView::from_store(&mut store, ProjectionConfig::new(2026, 35, 0)).is_err());
    }
}
