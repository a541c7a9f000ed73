//! Projection engine for year-by-year net worth projections

mod state;
mod engine;
mod cashflows;
mod inputs;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use cashflows::{ProjectionRow, ProjectionResult, NO_EVENTS};
pub use inputs::{GoalWindow, MissingMonthlyPolicy, ProjectionInputs};

// ============================================================================
// Default Horizon
// ============================================================================
// A 35 year old projected over 40 years, ending at 74.

/// Default age in the first projected year
pub const DEFAULT_START_AGE: u32 = 35;

/// Default number of projected years
pub const DEFAULT_PROJECTION_YEARS: u32 = 40;

/// Longest horizon accepted by [`ProjectionConfig::validate`]
pub const MAX_PROJECTION_YEARS: u32 = 150;
