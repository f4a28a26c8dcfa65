// BayLog - ui/panels/notice.rs
//
// Blocking notice (e.g. "Incorrect password."). Rendered as a modal so the
// rest of the window ignores input until it is dismissed.

use crate::app::state::AppState;

/// Render the notice (if one is pending).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.notice.clone() else {
        return;
    };

    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_min_width(240.0);
        ui.heading("Notice");
        ui.add_space(4.0);
        ui.label(message);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    // Escape or a click on the backdrop also dismisses.
    if dismissed || response.should_close() {
        state.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Bay;
    use crate::platform::config::AppConfig;

    fn state() -> AppState {
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        AppState::new(&AppConfig::default(), Bay::first(), today, false)
    }

    #[test]
    fn test_pending_notice_stays_until_dismissed() {
        let ctx = egui::Context::default();
        let mut state = state();
        state.notice = Some("Incorrect password.".to_string());

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| render(ctx, &mut state));
        }
        assert_eq!(state.notice.as_deref(), Some("Incorrect password."));
    }

    #[test]
    fn test_no_notice_renders_nothing() {
        let ctx = egui::Context::default();
        let mut state = state();
        let _ = ctx.run(egui::RawInput::default(), |ctx| render(ctx, &mut state));
        assert!(state.notice.is_none());
    }
}
