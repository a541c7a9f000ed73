//! Financial records, validation and storage

mod data;
pub mod validate;
pub mod store;
pub mod loader;

pub use data::{Asset, AssetType, MonthlyFinancial, LifeGoal, GoalType, SimulationSettings};
pub use validate::Validate;
pub use store::{
    RecordId, Repository, Table, RecordStore, MemoryStore,
    goals_by_start_year, monthly_newest_first, total_asset_amount,
};
pub use loader::{load_store, save_store};
