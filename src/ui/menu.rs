//! Top-Menü (File, Edit, View, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Neu").clicked() {
                    events.push(AppIntent::NewProfileRequested);
                    ui.close();
                }

                if ui.button("Open...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Save").clicked() {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui.button("Save As...").clicked() {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo / Optionen
            ui.menu_button("Edit", |ui| {
                let undo_text = match state.history.undo_label() {
                    Some(label) => format!("Rückgängig: {} (Ctrl+Z)", label),
                    None => "Rückgängig (Ctrl+Z)".to_string(),
                };
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new(undo_text))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                let redo_text = match state.history.redo_label() {
                    Some(label) => format!("Wiederholen: {} (Ctrl+Y)", label),
                    None => "Wiederholen (Ctrl+Y / Shift+Cmd+Z)".to_string(),
                };
                if ui
                    .add_enabled(state.can_redo(), egui::Button::new(redo_text))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Scroll zurücksetzen").clicked() {
                    events.push(AppIntent::ScrollResetRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Motion-Profile-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
