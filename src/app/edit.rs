// BayLog - app/edit.rs
//
// Per-day edit dialog state. Each record of the chosen day gets a draft
// that the user edits freely; only Save pushes a patch into the store, so a
// half-typed (e.g. momentarily blank) plate never reaches the store.

use crate::core::model::{Bay, WashRecord, WashUpdate};
use crate::core::store::BayLogStore;
use chrono::NaiveDate;

/// Editable copy of one record's descriptive fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: u64,
    pub plate: String,
    pub brand: String,
    pub color: String,
    pub wash_type: String,
    pub operators: String,
}

impl EditDraft {
    pub fn from_record(record: &WashRecord) -> Self {
        Self {
            id: record.id,
            plate: record.plate.clone(),
            brand: record.brand.clone(),
            color: record.color.clone(),
            wash_type: record.wash_type.clone(),
            operators: record.operators.clone(),
        }
    }

    /// Patch containing only the fields that differ from `current`.
    pub fn to_update(&self, current: &WashRecord) -> WashUpdate {
        fn changed(draft: &str, stored: &str) -> Option<String> {
            (draft != stored).then(|| draft.to_string())
        }

        WashUpdate {
            plate: changed(&self.plate, &current.plate),
            brand: changed(&self.brand, &current.brand),
            color: changed(&self.color, &current.color),
            wash_type: changed(&self.wash_type, &current.wash_type),
            operators: changed(&self.operators, &current.operators),
        }
    }
}

/// Open edit dialog for one bay and one service day.
#[derive(Debug, Clone)]
pub struct EditDialog {
    pub bay: Bay,
    pub day: NaiveDate,
    pub drafts: Vec<EditDraft>,
}

impl EditDialog {
    /// Snapshot every record of `bay` on `day`, regardless of the search.
    pub fn open(store: &BayLogStore, bay: Bay, day: NaiveDate) -> Self {
        let drafts = store
            .records(bay)
            .iter()
            .filter(|r| r.date == day)
            .map(EditDraft::from_record)
            .collect();
        Self { bay, day, drafts }
    }

    /// Reset one draft to the stored record (after save or a rejected save).
    pub fn reload_draft(&mut self, store: &BayLogStore, id: u64) {
        if let (Some(draft), Some(record)) = (
            self.drafts.iter_mut().find(|d| d.id == id),
            store.get(id),
        ) {
            *draft = EditDraft::from_record(record);
        }
    }

    /// Add a draft for a freshly logged record if it belongs to this
    /// dialog's bay and day. Returns true if a draft was added.
    pub fn track_new(&mut self, record: &WashRecord) -> bool {
        if record.bay != self.bay
            || record.date != self.day
            || self.drafts.iter().any(|d| d.id == record.id)
        {
            return false;
        }
        self.drafts.push(EditDraft::from_record(record));
        true
    }

    /// Drop the draft of a deleted record.
    pub fn remove_draft(&mut self, id: u64) {
        self.drafts.retain(|d| d.id != id);
    }

    /// Dialog title naming the bay and day.
    pub fn title(&self) -> String {
        format!(
            "Edit \u{2014} {} \u{2022} {}",
            self.bay,
            self.day.format(crate::util::constants::DATE_FORMAT)
        )
    }
}
