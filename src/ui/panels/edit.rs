// BayLog - ui/panels/edit.rs
//
// Per-day edit window. Each row edits a draft; Save pushes the changed
// fields into the store, Delete removes the record immediately.

use crate::app::state::AppState;
use crate::ui::theme;

enum RowAction {
    Save(u64),
    Delete(u64),
}

/// Render the edit dialog (if one is open).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.edit.as_mut() else {
        return;
    };

    let mut open = true;
    let mut action = None;

    egui::Window::new(dialog.title())
        .id(egui::Id::new("edit_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if dialog.drafts.is_empty() {
                ui.label(egui::RichText::new("No records for this day.").color(theme::MUTED));
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("edit_rows")
                .max_height(360.0)
                .show(ui, |ui| {
                    egui::Grid::new("edit_grid")
                        .num_columns(7)
                        .striped(true)
                        .spacing([6.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("Plate");
                            ui.strong("Brand");
                            ui.strong("Color");
                            ui.strong("Type");
                            ui.strong("Operators");
                            ui.label("");
                            ui.label("");
                            ui.end_row();

                            for draft in dialog.drafts.iter_mut() {
                                for field in [
                                    &mut draft.plate,
                                    &mut draft.brand,
                                    &mut draft.color,
                                    &mut draft.wash_type,
                                    &mut draft.operators,
                                ] {
                                    ui.add(
                                        egui::TextEdit::singleline(field)
                                            .desired_width(theme::EDIT_FIELD_WIDTH),
                                    );
                                }
                                if ui.button("Save").clicked() {
                                    action = Some(RowAction::Save(draft.id));
                                }
                                let delete = ui.add(egui::Button::new(
                                    egui::RichText::new("Delete").color(theme::DANGER),
                                ));
                                if delete.clicked() {
                                    action = Some(RowAction::Delete(draft.id));
                                }
                                ui.end_row();
                            }
                        });
                });
        });

    match action {
        Some(RowAction::Save(id)) => {
            let _ = state.save_draft(id);
        }
        Some(RowAction::Delete(id)) => {
            if let Err(e) = state.delete_record(id) {
                state.status_message = e.to_string();
            }
        }
        None => {}
    }

    if !open {
        state.edit = None;
    }
}
