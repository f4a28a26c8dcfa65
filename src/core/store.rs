// BayLog - core/store.rs
//
// In-memory bay log: every wash record, partitioned by bay, plus the
// per-bay default operators.
//
// Every operation is synchronous and either succeeds and mutates, or
// returns a StoreError and leaves the store exactly as it was.
// Records are appended, so each bay list is in insertion order.

use crate::core::filter::{group_by_date, DayGroup, SearchQuery};
use crate::core::model::{Bay, BayDefaults, NewWash, WashRecord, WashUpdate};
use crate::util::constants::{BAY_COUNT, CLEAR_PASSWORD, FIRST_RECORD_ID, OTHER};
use crate::util::error::StoreError;

/// The single owner of all wash records for a session.
#[derive(Debug, Clone)]
pub struct BayLogStore {
    bays: [Vec<WashRecord>; BAY_COUNT],
    defaults: BayDefaults,
    next_id: u64,
}

impl Default for BayLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BayLogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            bays: Default::default(),
            defaults: BayDefaults::default(),
            next_id: FIRST_RECORD_ID,
        }
    }

    /// Create an empty store with pre-set bay defaults.
    pub fn with_defaults(defaults: BayDefaults) -> Self {
        Self {
            defaults,
            ..Self::new()
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Log a new wash into `wash.bay`.
    ///
    /// Rejected with `BlankPlate` when the plate is blank after trimming.
    pub fn add(&mut self, wash: NewWash) -> Result<&WashRecord, StoreError> {
        let plate = normalise_plate(&wash.plate).ok_or(StoreError::BlankPlate)?;

        let id = self.next_id;
        self.next_id += 1;

        let bay = wash.bay;
        let record = WashRecord {
            id,
            bay,
            plate,
            brand: wash.brand.effective(),
            color: wash.color.effective(),
            wash_type: wash.wash_type.effective(),
            date: wash.date.unwrap_or_else(today),
            operators: wash.operators.trim().to_string(),
        };

        let list = &mut self.bays[bay.index()];
        list.push(record);
        tracing::debug!(%bay, id, count = list.len(), "Wash record added");
        Ok(&list[list.len() - 1])
    }

    /// Apply a partial edit to the record with `id`.
    ///
    /// A plate in the patch is normalised like on intake and must not be
    /// blank. Blank category values fall back to `"Other"`.
    pub fn update(&mut self, id: u64, patch: WashUpdate) -> Result<&WashRecord, StoreError> {
        let record = self
            .find_mut(id)
            .ok_or(StoreError::RecordNotFound { id })?;

        // Validate before touching any field so a rejected patch is a no-op.
        let plate = match patch.plate.as_deref() {
            Some(raw) => Some(normalise_plate(raw).ok_or(StoreError::BlankPlate)?),
            None => None,
        };

        if let Some(plate) = plate {
            record.plate = plate;
        }
        if let Some(brand) = patch.brand {
            record.brand = category_text(&brand);
        }
        if let Some(color) = patch.color {
            record.color = category_text(&color);
        }
        if let Some(wash_type) = patch.wash_type {
            record.wash_type = category_text(&wash_type);
        }
        if let Some(operators) = patch.operators {
            record.operators = operators.trim().to_string();
        }

        tracing::debug!(id, bay = %record.bay, "Wash record updated");
        Ok(&*record)
    }

    /// Remove the record with `id` from whichever bay holds it.
    pub fn delete(&mut self, id: u64) -> Result<WashRecord, StoreError> {
        for list in self.bays.iter_mut() {
            if let Some(pos) = list.iter().position(|r| r.id == id) {
                let removed = list.remove(pos);
                tracing::debug!(id, bay = %removed.bay, "Wash record deleted");
                return Ok(removed);
            }
        }
        Err(StoreError::RecordNotFound { id })
    }

    /// Empty every bay. Returns the number of records removed.
    pub fn clear_all(&mut self, password: &str) -> Result<usize, StoreError> {
        check_password(password)?;
        let removed = self.total();
        for list in self.bays.iter_mut() {
            list.clear();
        }
        tracing::info!(removed, "All bays cleared");
        Ok(removed)
    }

    /// Empty one bay. Returns the number of records removed.
    pub fn clear_bay(&mut self, bay: Bay, password: &str) -> Result<usize, StoreError> {
        check_password(password)?;
        let list = &mut self.bays[bay.index()];
        let removed = list.len();
        list.clear();
        tracing::info!(%bay, removed, "Bay cleared");
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    /// Records of `bay` matching `query`, grouped by date, newest day first.
    pub fn list_for_bay(&self, bay: Bay, query: &str) -> Vec<DayGroup<'_>> {
        let query = SearchQuery::new(query);
        group_by_date(self.records(bay).iter().filter(|r| query.matches(r)))
    }

    /// All records of `bay` in insertion order.
    pub fn records(&self, bay: Bay) -> &[WashRecord] {
        &self.bays[bay.index()]
    }

    /// All records, bay 1 through 9, each bay in insertion order.
    pub fn iter_all(&self) -> impl Iterator<Item = &WashRecord> {
        self.bays.iter().flatten()
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<&WashRecord> {
        self.iter_all().find(|r| r.id == id)
    }

    /// Number of records in `bay`.
    pub fn count(&self, bay: Bay) -> usize {
        self.bays[bay.index()].len()
    }

    /// Number of records across all bays.
    pub fn total(&self) -> usize {
        self.bays.iter().map(Vec::len).sum()
    }

    /// Returns true if no bay holds any record.
    pub fn is_empty(&self) -> bool {
        self.bays.iter().all(Vec::is_empty)
    }

    // -------------------------------------------------------------------------
    // Bay defaults
    // -------------------------------------------------------------------------

    /// Default operators for `bay`. Read by intake when a bay is selected.
    pub fn default_operators(&self, bay: Bay) -> &str {
        self.defaults.get(bay)
    }

    /// Replace the default operators for `bay`. Existing records are unaffected.
    pub fn set_default_operators(&mut self, bay: Bay, operators: impl Into<String>) {
        self.defaults.set(bay, operators);
    }

    /// All bay defaults.
    pub fn defaults(&self) -> &BayDefaults {
        &self.defaults
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut WashRecord> {
        self.bays
            .iter_mut()
            .flat_map(|list| list.iter_mut())
            .find(|r| r.id == id)
    }
}

/// Trim and uppercase a plate; `None` if nothing is left.
pub fn normalise_plate(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

fn category_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        OTHER.to_string()
    } else {
        trimmed.to_string()
    }
}

fn check_password(supplied: &str) -> Result<(), StoreError> {
    if supplied == CLEAR_PASSWORD {
        Ok(())
    } else {
        tracing::warn!("Clear rejected: incorrect password");
        Err(StoreError::WrongPassword)
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
