//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(path) = state.profile.active_path() {
                ui.label(format!(
                    "Pfad: {} | Keyframes: {} | Samples: {}",
                    path.name,
                    path.keyframes().len(),
                    path.sample_count()
                ));
            } else {
                ui.label("Kein Pfad aktiv");
            }

            ui.separator();

            ui.label(format!("Scroll: {:.0} px", state.view.scroll_offset));

            ui.separator();

            let (undo_depth, redo_depth) = state.history.depths();
            ui.label(format!("Undo: {} | Redo: {}", undo_depth, redo_depth));

            ui.separator();

            if let Some(file) = &state.ui.current_file_path {
                let filename = std::path::Path::new(file)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            } else {
                ui.label("Datei: ungespeichert");
            }

            // Statusnachricht (z.B. Undo-Beschriftung, Fehler)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
