//! Record repositories and the in-memory store

use std::collections::BTreeMap;

use log::{debug, info};

use super::validate::Validate;
use super::{Asset, LifeGoal, MonthlyFinancial, SimulationSettings};
use crate::error::{Error, Result};

/// Identifier assigned to a record on creation
pub type RecordId = u32;

/// Basic CRUD access to one record type
pub trait Repository<T> {
    /// All records in creation order
    fn list(&self) -> Vec<(RecordId, &T)>;

    fn get(&self, id: RecordId) -> Result<&T>;

    /// Validate and store a new record, returning its id
    fn create(&mut self, record: T) -> Result<RecordId>;

    /// Validate and replace an existing record
    fn update(&mut self, id: RecordId, record: T) -> Result<()>;

    /// Remove a record, returning it
    fn delete(&mut self, id: RecordId) -> Result<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Earliest created record still present
    fn first(&self) -> Option<&T> {
        self.list().into_iter().next().map(|(_, record)| record)
    }
}

/// In-memory table keyed by ascending ids
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate records in creation order without their ids
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T: Validate> Repository<T> for Table<T> {
    fn list(&self) -> Vec<(RecordId, &T)> {
        self.rows.iter().map(|(id, record)| (*id, record)).collect()
    }

    fn get(&self, id: RecordId) -> Result<&T> {
        self.rows.get(&id).ok_or(Error::NotFound { kind: T::KIND, id })
    }

    fn create(&mut self, record: T) -> Result<RecordId> {
        record.validate()?;
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(id, record);
        debug!("created {} #{}", T::KIND, id);
        Ok(id)
    }

    fn update(&mut self, id: RecordId, record: T) -> Result<()> {
        record.validate()?;
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                debug!("updated {} #{}", T::KIND, id);
                Ok(())
            }
            None => Err(Error::NotFound { kind: T::KIND, id }),
        }
    }

    fn delete(&mut self, id: RecordId) -> Result<T> {
        let removed = self.rows.remove(&id).ok_or(Error::NotFound { kind: T::KIND, id })?;
        debug!("deleted {} #{}", T::KIND, id);
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Read/write access to every record collection plus the settings singleton
pub trait RecordStore {
    fn assets(&self) -> &dyn Repository<Asset>;
    fn assets_mut(&mut self) -> &mut dyn Repository<Asset>;

    fn monthly(&self) -> &dyn Repository<MonthlyFinancial>;
    fn monthly_mut(&mut self) -> &mut dyn Repository<MonthlyFinancial>;

    fn goals(&self) -> &dyn Repository<LifeGoal>;
    fn goals_mut(&mut self) -> &mut dyn Repository<LifeGoal>;

    /// The settings singleton, created with defaults on first read
    fn settings(&mut self) -> &SimulationSettings;

    fn update_settings(&mut self, settings: SimulationSettings) -> Result<()>;
}

/// Store holding every record in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) assets: Table<Asset>,
    pub(crate) monthly: Table<MonthlyFinancial>,
    pub(crate) goals: Table<LifeGoal>,
    pub(crate) settings: Option<SimulationSettings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings if they have been stored or materialized, without creating them
    pub fn stored_settings(&self) -> Option<&SimulationSettings> {
        self.settings.as_ref()
    }
}

impl RecordStore for MemoryStore {
    fn assets(&self) -> &dyn Repository<Asset> {
        &self.assets
    }

    fn assets_mut(&mut self) -> &mut dyn Repository<Asset> {
        &mut self.assets
    }

    fn monthly(&self) -> &dyn Repository<MonthlyFinancial> {
        &self.monthly
    }

    fn monthly_mut(&mut self) -> &mut dyn Repository<MonthlyFinancial> {
        &mut self.monthly
    }

    fn goals(&self) -> &dyn Repository<LifeGoal> {
        &self.goals
    }

    fn goals_mut(&mut self) -> &mut dyn Repository<LifeGoal> {
        &mut self.goals
    }

    fn settings(&mut self) -> &SimulationSettings {
        self.settings.get_or_insert_with(|| {
            info!("no simulation settings stored, using defaults");
            SimulationSettings::default()
        })
    }

    fn update_settings(&mut self, settings: SimulationSettings) -> Result<()> {
        settings.validate()?;
        self.settings = Some(settings);
        Ok(())
    }
}

/// Goals ordered by the year they start
pub fn goals_by_start_year(goals: &dyn Repository<LifeGoal>) -> Vec<(RecordId, &LifeGoal)> {
    let mut listed = goals.list();
    listed.sort_by_key(|(id, goal)| (goal.start_year, *id));
    listed
}

/// Monthly records with the latest month first
pub fn monthly_newest_first(
    monthly: &dyn Repository<MonthlyFinancial>,
) -> Vec<(RecordId, &MonthlyFinancial)> {
    let mut listed = monthly.list();
    listed.sort_by(|(a_id, a), (b_id, b)| {
        (b.year, b.month).cmp(&(a.year, a.month)).then(a_id.cmp(b_id))
    });
    listed
}

/// Sum of all asset amounts, saturating at the i64 range
pub fn total_asset_amount(assets: &dyn Repository<Asset>) -> i64 {
    assets
        .list()
        .into_iter()
        .fold(0i64, |total, (_, asset)| total.saturating_add(asset.amount))
}
