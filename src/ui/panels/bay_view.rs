// BayLog - ui/panels/bay_view.rs
//
// Single bay box: the selected bay's records after search, one frame per
// service day (newest first), each with an Edit button.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the bay view (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let bay = state.selected_bay;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(bay.badge()).strong().color(theme::ACCENT));
        ui.heading(bay.to_string());
    });
    ui.add_space(6.0);

    // Edit requests are collected here and applied after the loop so we do
    // not mutably borrow `state` while the groups borrow its store.
    let mut edit_day = None;

    let groups = state.visible_groups();
    if groups.is_empty() {
        let text = if state.store.count(bay) == 0 {
            "No logs yet."
        } else {
            "No entries match the search."
        };
        ui.label(egui::RichText::new(text).color(theme::MUTED));
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("bay_view")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for group in &groups {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(group.label());
                        ui.label(
                            egui::RichText::new(format!("{} washes", group.records.len()))
                                .small()
                                .weak(),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.link("Edit").clicked() {
                                edit_day = Some(group.date);
                            }
                        });
                    });
                    for record in &group.records {
                        ui.label(format!(
                            "\u{2022} {} \u{2014} {} ({}) \u{2014} {} \u{2014} {}",
                            record.plate,
                            record.brand,
                            record.color,
                            record.wash_type,
                            record.operators
                        ));
                    }
                });
                ui.add_space(4.0);
            }
        });

    drop(groups);
    if let Some(day) = edit_day {
        state.open_edit(day);
    }
}
