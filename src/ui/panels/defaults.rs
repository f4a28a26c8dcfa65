// BayLog - ui/panels/defaults.rs
//
// Operator defaults side panel: one text box per bay. Editing the selected
// bay's default fills the intake operators box only while it is empty.

use crate::app::state::AppState;
use crate::core::model::Bay;

/// Render the operator defaults panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Operator Defaults");
    ui.label(
        egui::RichText::new(
            "Set default operators per bay (autofills Intake Operators when that bay is selected).",
        )
        .small()
        .weak(),
    );
    ui.add_space(6.0);

    egui::Grid::new("operator_defaults")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for bay in Bay::all() {
                ui.label(bay.to_string());
                let mut value = state.store.default_operators(bay).to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .hint_text("name,name")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    state.set_default_operators(bay, &value);
                }
                ui.end_row();
            }
        });
}
