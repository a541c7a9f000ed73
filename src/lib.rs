//! Wealth Projection - year-by-year net worth projection for personal finances
//!
//! This library provides:
//! - Record types for assets, monthly income/expense and life goals
//! - A repository interface with an in-memory store and flat-file loader
//! - Rate assumptions converted once from stored percentages
//! - The yearly projection engine (compound growth, goal windows, running totals)
//! - Text table and dashboard renderers for projection results

pub mod error;
pub mod records;
pub mod assumptions;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use records::{Asset, LifeGoal, MemoryStore, MonthlyFinancial, RecordStore, SimulationSettings};
pub use assumptions::Assumptions;
pub use projection::{
    MissingMonthlyPolicy, ProjectionConfig, ProjectionEngine, ProjectionInputs, ProjectionResult,
    ProjectionRow,
};
