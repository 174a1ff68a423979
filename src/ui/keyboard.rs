//! Keyboard-Shortcuts für die Kurvenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    hovered_keyframe: Option<u64>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+N (Neu), Ctrl+O (Öffnen), Ctrl+S (Speichern), Shift+Ctrl+S (Speichern unter)
    let (key_n_pressed, key_o_pressed, key_s_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
        )
    });

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewProfileRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed && !modifiers.shift {
        events.push(AppIntent::SaveRequested);
    }

    if modifiers.command && key_s_pressed && modifiers.shift {
        events.push(AppIntent::SaveAsRequested);
    }

    // Delete/Backspace entfernt den Keyframe unter dem Zeiger,
    // Home springt an den Anfang des Scrollbereichs
    let (key_del_pressed, key_home_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Home),
        )
    });

    if key_del_pressed {
        if let Some(uid) = hovered_keyframe {
            events.push(AppIntent::KeyframeRemovalRequested { uid });
        }
    }

    if key_home_pressed && !modifiers.command {
        events.push(AppIntent::ScrollResetRequested);
    }

    events
}
