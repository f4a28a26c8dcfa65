// BayLog - ui/panels/intake.rs
//
// Intake bar: bay selector, plate, brand/colour/wash pickers with an
// "Other" free-text box, date, operators, and the Insert button.
// Enter in the plate box inserts as well.

use crate::app::state::AppState;
use crate::core::catalog::Category;
use crate::core::model::{Bay, CategoryChoice};
use crate::ui::theme;

/// Render the intake bar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut selected = state.selected_bay;
    let mut insert = false;

    ui.horizontal_wrapped(|ui| {
        egui::ComboBox::from_id_salt("intake_bay")
            .selected_text(selected.to_string())
            .show_ui(ui, |ui| {
                for bay in Bay::all() {
                    let label = format!("{bay} ({})", state.store.count(bay));
                    ui.selectable_value(&mut selected, bay, label);
                }
            });

        let plate = ui.add(
            egui::TextEdit::singleline(&mut state.intake.plate)
                .hint_text("License Plate")
                .desired_width(theme::FIELD_WIDTH),
        );
        if plate.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            insert = true;
        }

        for category in [Category::Brand, Category::Color, Category::WashType] {
            category_picker(ui, category, state.intake.category_mut(category));
        }

        ui.add(
            egui::TextEdit::singleline(&mut state.intake.date)
                .hint_text("YYYY-MM-DD")
                .desired_width(90.0),
        );

        ui.add(
            egui::TextEdit::singleline(&mut state.intake.operators)
                .hint_text("Operators (e.g. John,Doe)")
                .desired_width(theme::FIELD_WIDTH),
        );

        if ui.button("Insert").clicked() {
            insert = true;
        }
    });

    if selected != state.selected_bay {
        state.select_bay(selected);
    }
    if insert {
        // Blank plates are ignored; other rejections land in the status bar.
        let _ = state.insert();
    }
}

/// Catalogue combo box, plus a free-text box while "Other" is picked.
fn category_picker(ui: &mut egui::Ui, category: Category, choice: &mut CategoryChoice) {
    egui::ComboBox::from_id_salt(("intake_category", category.label()))
        .selected_text(choice.value.as_str())
        .show_ui(ui, |ui| {
            for option in category.options() {
                ui.selectable_value(&mut choice.value, (*option).to_string(), *option);
            }
        });

    if choice.is_other() {
        ui.add(
            egui::TextEdit::singleline(&mut choice.other)
                .hint_text(format!("{} (Other)", category.label()))
                .desired_width(theme::FIELD_WIDTH),
        );
    }
}
