// BayLog - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and services the flags they raise.

use crate::app::state::AppState;
use crate::core::export::{self, ExportFormat};
use crate::ui;

/// The BayLog application.
pub struct BayLogApp {
    pub state: AppState,
}

impl BayLogApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Show the save dialog for a pending export and write the file.
    fn handle_pending_export(&mut self) {
        let Some((scope, format)) = self.state.pending_export.take() else {
            return;
        };

        let (filter_name, extensions): (&str, &[&str]) = match format {
            ExportFormat::Csv => ("CSV", &["csv"]),
            ExportFormat::Json => ("JSON", &["json"]),
        };

        let dest = rfd::FileDialog::new()
            .add_filter(filter_name, extensions)
            .set_file_name(export::default_file_name(scope, format))
            .save_file();

        match dest {
            Some(path) => {
                // Outcome is reported through the status bar.
                let _ = self.state.export_to(scope, format, &path);
            }
            None => {
                tracing::debug!("Export cancelled");
            }
        }
    }
}

impl eframe::App for BayLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Handle flags set by panels ----
        self.handle_pending_export();

        // Toolbar + intake bar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::toolbar::render(ui, &mut self.state);
            ui.separator();
            ui::panels::intake::render(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let bay = self.state.selected_bay;
                    ui.label(format!(
                        "{bay}: {} / total: {}",
                        self.state.store.count(bay),
                        self.state.store.total()
                    ));
                });
            });
        });

        // Operator defaults (right)
        egui::SidePanel::right("operator_defaults")
            .default_width(ui::theme::DEFAULTS_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("defaults_scroll")
                    .show(ui, |ui| {
                        ui::panels::defaults::render(ui, &mut self.state);
                    });
            });

        // Central panel (selected bay)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::bay_view::render(ui, &mut self.state);
        });

        // Dialogs
        ui::panels::edit::render(ctx, &mut self.state);
        ui::panels::notice::render(ctx, &mut self.state);
    }
}
