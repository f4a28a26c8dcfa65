// BayLog - ui/panels/toolbar.rs
//
// Top bar: title, search box, export menu, and the password-protected
// Clear All / Clear Bay controls.

use crate::app::state::AppState;
use crate::core::export::{ExportFormat, ExportScope};
use crate::ui::theme;
use crate::util::constants::{APP_NAME, BUSINESS_NAME};

/// Render the top bar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(format!("{BUSINESS_NAME} \u{2014} Carwash Bay Tracker"));
            ui.label(
                egui::RichText::new(
                    "Intake bar \u{2022} Single Bay View \u{2022} Search \u{2022} Export \u{2022} Protected Clear",
                )
                .small()
                .weak(),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: widgets appear in reverse order.
            let bay = state.selected_bay;
            let clear_bay = ui.add(
                egui::Button::new(egui::RichText::new(format!("Clear {bay}")).color(theme::DANGER)),
            );
            if clear_bay.clicked() {
                let _ = state.clear_selected_bay();
            }
            let clear_all =
                ui.add(egui::Button::new(egui::RichText::new("Clear All").color(theme::DANGER)));
            if clear_all.clicked() {
                let _ = state.clear_all();
            }
            ui.add(
                egui::TextEdit::singleline(&mut state.clear_password)
                    .password(true)
                    .hint_text("Password")
                    .desired_width(theme::PASSWORD_WIDTH),
            );

            ui.separator();

            ui.menu_button("Export", |ui| {
                for format in [ExportFormat::Csv, ExportFormat::Json] {
                    if ui
                        .button(format!("Export All ({})\u{2026}", format.label()))
                        .clicked()
                    {
                        state.pending_export = Some((ExportScope::AllBays, format));
                        ui.close_menu();
                    }
                    if ui
                        .button(format!("Export {bay} ({})\u{2026}", format.label()))
                        .clicked()
                    {
                        state.pending_export = Some((ExportScope::Bay(bay), format));
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if ui.checkbox(&mut state.dark_mode, "Dark mode").changed() {
                    theme::apply(ui.ctx(), state.dark_mode, state.font_size);
                    ui.close_menu();
                }
            });

            ui.add(
                egui::TextEdit::singleline(&mut state.search)
                    .hint_text("Search (plate, type, date, brand, color, ops)")
                    .desired_width(theme::SEARCH_WIDTH),
            );
        });
    });

    if state.debug_mode {
        ui.label(
            egui::RichText::new(format!(
                "{APP_NAME} debug: {} records in store",
                state.store.total()
            ))
            .small()
            .weak(),
        );
    }
}
