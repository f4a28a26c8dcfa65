// BayLog - app/state.rs
//
// Application state management. Holds the single bay log store, the
// selected bay, the intake form, search/password text, and dialog state.
// Owned by the eframe::App implementation and passed explicitly to panels.

use crate::app::edit::EditDialog;
use crate::app::intake::IntakeForm;
use crate::core::export::{self, ExportFormat, ExportScope};
use crate::core::filter::DayGroup;
use crate::core::model::Bay;
use crate::core::store::BayLogStore;
use crate::platform::config::AppConfig;
use crate::util::error::{self, ExportError, StoreError};
use chrono::NaiveDate;
use std::path::Path;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All wash records and bay defaults.
    pub store: BayLogStore,

    /// Bay shown in the single-bay view and targeted by intake.
    pub selected_bay: Bay,

    /// Intake bar fields.
    pub intake: IntakeForm,

    /// Search box text.
    pub search: String,

    /// Password box text for Clear All / Clear Bay.
    pub clear_password: String,

    /// Open per-day edit dialog, if any.
    pub edit: Option<EditDialog>,

    /// Blocking notice (e.g. incorrect password). Dismissed by the user.
    pub notice: Option<String>,

    /// Export requested by a panel; the save dialog is shown by the app loop.
    pub pending_export: Option<(ExportScope, ExportFormat)>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated config.
    pub fn new(config: &AppConfig, initial_bay: Bay, today: NaiveDate, debug_mode: bool) -> Self {
        let store = BayLogStore::with_defaults(config.bay_defaults.clone());
        let intake = IntakeForm::new(initial_bay, today, store.defaults());
        Self {
            store,
            selected_bay: initial_bay,
            intake,
            search: String::new(),
            clear_password: String::new(),
            edit: None,
            notice: None,
            pending_export: None,
            status_message: "Ready.".to_string(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Select the bay for viewing and intake.
    pub fn select_bay(&mut self, bay: Bay) {
        if bay == self.selected_bay {
            return;
        }
        self.selected_bay = bay;
        self.intake.select_bay(bay, self.store.defaults());
        self.edit = None;
        tracing::debug!(%bay, "Bay selected");
    }

    /// Update a bay's default operators and let intake mirror it.
    pub fn set_default_operators(&mut self, bay: Bay, operators: &str) {
        self.store.set_default_operators(bay, operators);
        self.intake.on_default_changed(bay, operators);
    }

    /// Day groups for the single-bay view, after search.
    pub fn visible_groups(&self) -> Vec<DayGroup<'_>> {
        self.store.list_for_bay(self.selected_bay, &self.search)
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Insert the intake form into the store.
    ///
    /// A blank plate is ignored silently; a bad date goes to the status bar.
    pub fn insert(&mut self) -> Result<u64, StoreError> {
        let result = self
            .intake
            .to_new_wash()
            .and_then(|wash| self.store.add(wash).map(|r| (r.id, r.bay)));

        match result {
            Ok((id, bay)) => {
                if let (Some(dialog), Some(record)) = (self.edit.as_mut(), self.store.get(id)) {
                    dialog.track_new(record);
                }
                self.intake.reset_after_insert();
                self.status_message = format!("Logged wash #{id} in {bay}.");
                tracing::info!(id, %bay, "Wash logged");
                Ok(id)
            }
            Err(StoreError::BlankPlate) => Err(StoreError::BlankPlate),
            Err(e) => {
                self.status_message = e.to_string();
                Err(e)
            }
        }
    }

    /// Open the edit dialog for one day of the selected bay.
    pub fn open_edit(&mut self, day: NaiveDate) {
        self.edit = Some(EditDialog::open(&self.store, self.selected_bay, day));
    }

    /// Push the edited draft of record `id` into the store.
    pub fn save_draft(&mut self, id: u64) -> Result<(), StoreError> {
        let Some(dialog) = self.edit.as_mut() else {
            return Ok(());
        };
        let Some(draft) = dialog.drafts.iter().find(|d| d.id == id) else {
            return Err(StoreError::RecordNotFound { id });
        };
        let current = self
            .store
            .get(id)
            .ok_or(StoreError::RecordNotFound { id })?;

        let patch = draft.to_update(current);
        let result = if patch.is_empty() {
            Ok(())
        } else {
            self.store.update(id, patch).map(|_| ())
        };

        match &result {
            Ok(()) => self.status_message = format!("Saved wash #{id}."),
            Err(e) => self.status_message = format!("Not saved: {e}"),
        }
        dialog.reload_draft(&self.store, id);
        result
    }

    /// Delete record `id` and drop it from an open edit dialog.
    pub fn delete_record(&mut self, id: u64) -> Result<(), StoreError> {
        let removed = self.store.delete(id)?;
        if let Some(dialog) = self.edit.as_mut() {
            dialog.remove_draft(id);
        }
        self.status_message = format!("Deleted wash #{} ({}).", removed.id, removed.plate);
        Ok(())
    }

    /// Clear every bay using the password box.
    pub fn clear_all(&mut self) -> Result<usize, StoreError> {
        let result = self.store.clear_all(&self.clear_password);
        self.after_clear(&result, "all bays");
        result
    }

    /// Clear the selected bay using the password box.
    pub fn clear_selected_bay(&mut self) -> Result<usize, StoreError> {
        let bay = self.selected_bay;
        let result = self.store.clear_bay(bay, &self.clear_password);
        self.after_clear(&result, &bay.to_string());
        result
    }

    fn after_clear(&mut self, result: &Result<usize, StoreError>, what: &str) {
        match result {
            Ok(removed) => {
                self.clear_password.clear();
                self.edit = None;
                self.status_message = format!("Cleared {what} ({removed} records).");
            }
            Err(e) => {
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Write an export of `scope` to `path`.
    pub fn export_to(
        &mut self,
        scope: ExportScope,
        format: ExportFormat,
        path: &Path,
    ) -> error::Result<usize> {
        let result = write_export(&self.store, scope, format, path);
        match &result {
            Ok(n) => {
                self.status_message = format!(
                    "Exported {n} records to {} ({}).",
                    path.display(),
                    format.label()
                );
                tracing::info!(records = n, path = %path.display(), "Export complete");
            }
            Err(e) => {
                self.status_message = format!("Export failed: {e}");
                tracing::warn!(error = %e, "Export failed");
            }
        }
        result
    }
}

fn write_export(
    store: &BayLogStore,
    scope: ExportScope,
    format: ExportFormat,
    path: &Path,
) -> error::Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let count = match format {
        ExportFormat::Csv => export::export_csv(store, scope, writer, path)?,
        ExportFormat::Json => export::export_json(store, scope, writer, path)?,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::CategoryChoice;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn state() -> AppState {
        AppState::new(&AppConfig::default(), Bay::first(), june(1), false)
    }

    fn insert_plate(state: &mut AppState, plate: &str) -> u64 {
        state.intake.plate = plate.to_string();
        state.insert().unwrap()
    }

    #[test]
    fn test_insert_logs_into_selected_bay_and_resets_form() {
        let mut state = state();
        state.select_bay(Bay::new(4).unwrap());
        state.intake.color = CategoryChoice::other("Vintage Red");
        let id = insert_plate(&mut state, "abc123");

        let record = state.store.get(id).unwrap();
        assert_eq!(record.bay, Bay::new(4).unwrap());
        assert_eq!(record.color, "Vintage Red");
        assert!(state.intake.plate.is_empty());
        assert_eq!(state.intake.color.value, "White");
    }

    #[test]
    fn test_blank_plate_insert_is_silent() {
        let mut state = state();
        state.intake.plate = "  ".to_string();
        assert_eq!(state.insert(), Err(StoreError::BlankPlate));
        assert_eq!(state.status_message, "Ready.");
        assert!(state.store.is_empty());
    }

    #[test]
    fn test_wrong_password_raises_notice_and_keeps_data() {
        let mut state = state();
        insert_plate(&mut state, "A1");
        state.clear_password = "0000".to_string();

        assert_eq!(state.clear_all(), Err(StoreError::WrongPassword));
        assert_eq!(state.notice.as_deref(), Some("Incorrect password."));
        assert_eq!(state.store.total(), 1);

        state.notice = None;
        state.clear_password = "1990".to_string();
        assert_eq!(state.clear_selected_bay(), Ok(1));
        assert!(state.clear_password.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_save_draft_applies_changes() {
        let mut state = state();
        let id = insert_plate(&mut state, "A1");
        state.open_edit(june(1));

        let dialog = state.edit.as_mut().unwrap();
        dialog.drafts[0].operators = "Jane".to_string();
        state.save_draft(id).unwrap();
        assert_eq!(state.store.get(id).unwrap().operators, "Jane");

        let dialog = state.edit.as_mut().unwrap();
        dialog.drafts[0].plate = " ".to_string();
        assert_eq!(state.save_draft(id), Err(StoreError::BlankPlate));
        assert_eq!(state.store.get(id).unwrap().plate, "A1");
        assert_eq!(state.edit.as_ref().unwrap().drafts[0].plate, "A1");
    }

    #[test]
    fn test_insert_refreshes_open_dialog_for_same_day() {
        let mut state = state();
        insert_plate(&mut state, "A1");
        state.open_edit(june(1));

        state.intake.plate = "B2".to_string();
        state.intake.date = "2025-06-01".to_string();
        state.insert().unwrap();
        state.intake.plate = "C3".to_string();
        state.intake.date = "2025-06-02".to_string();
        state.insert().unwrap();

        let plates: Vec<String> = state
            .edit
            .as_ref()
            .unwrap()
            .drafts
            .iter()
            .map(|d| d.plate.clone())
            .collect();
        assert_eq!(plates, vec!["A1", "B2"]);
    }

    #[test]
    fn test_delete_record_updates_dialog() {
        let mut state = state();
        let id = insert_plate(&mut state, "A1");
        insert_plate(&mut state, "B2");
        state.open_edit(june(1));

        state.delete_record(id).unwrap();
        assert_eq!(state.edit.as_ref().unwrap().drafts.len(), 1);
        assert!(state.delete_record(id).is_err());
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bays-all.csv");
        let mut state = state();
        insert_plate(&mut state, "A1");

        let n = state
            .export_to(ExportScope::AllBays, ExportFormat::Csv, &path)
            .unwrap();
        assert_eq!(n, 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_default_operators_mirror_into_intake() {
        let mut state = state();
        state.set_default_operators(Bay::first(), "Mo");
        assert_eq!(state.intake.operators, "Mo");
        assert_eq!(state.store.default_operators(Bay::first()), "Mo");
    }
}
