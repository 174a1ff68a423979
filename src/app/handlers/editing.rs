//! Handler für Keyframe-Editing und Pfad-Konfiguration.
//!
//! Alle mutierenden Operationen laufen als [`EditCommand`] durch die
//! History, damit sie rückgängig gemacht werden können.

use crate::app::edit_commands::EditCommand;
use crate::app::AppState;
use crate::core::{ConfigPatch, DomainPos, KeyframePatch};

/// Fügt an der Domänen-Position einen neuen Keyframe ein.
pub fn add_keyframe(state: &mut AppState, pos: DomainPos) {
    let window = state.options.merge_window();
    let Some(path) = state.profile.active_path_mut() else {
        log::warn!("Kein aktiver Pfad, Keyframe wird verworfen");
        return;
    };
    let command = EditCommand::add_keyframe(path, pos);
    state.history.execute(command, path, window);
}

/// Verschiebt einen Keyframe an die neue Domänen-Position.
///
/// Jeder Schritt wird als eigener History-Eintrag aufgezeichnet, damit
/// Undo eine Drag-Bewegung schrittweise zurückläuft.
pub fn move_keyframe(state: &mut AppState, uid: u64, to: DomainPos) {
    let Some(path) = state.profile.active_path_mut() else {
        log::warn!("Kein aktiver Pfad zum Verschieben");
        return;
    };
    let Some(command) = EditCommand::move_keyframe(path, uid, to) else {
        // Unbekannter Keyframe oder unveränderte Position
        return;
    };
    state.history.execute(command, path, None);
}

/// Schaltet das Biegeraten-Folgen eines Keyframes um.
pub fn toggle_follow_bent_rate(state: &mut AppState, uid: u64) {
    let window = state.options.merge_window();
    let Some(path) = state.profile.active_path_mut() else {
        log::warn!("Kein aktiver Pfad zum Umschalten");
        return;
    };
    let Some(keyframe) = path.keyframe(uid) else {
        log::warn!("Keyframe {} nicht gefunden", uid);
        return;
    };
    let patch = KeyframePatch::follow(!keyframe.follow_bent_rate);
    let Some(command) = EditCommand::update_keyframe(path, uid, patch) else {
        return;
    };
    state.history.execute(command, path, window);
}

/// Entfernt einen Keyframe aus dem aktiven Pfad.
pub fn remove_keyframe(state: &mut AppState, uid: u64) {
    let Some(path) = state.profile.active_path_mut() else {
        log::warn!("Kein aktiver Pfad zum Entfernen");
        return;
    };
    let Some(command) = EditCommand::remove_keyframe(path, uid) else {
        log::warn!("Keyframe {} nicht gefunden", uid);
        return;
    };
    state.history.execute(command, path, None);
    if state.ui.hovered_keyframe == Some(uid) {
        state.ui.hovered_keyframe = None;
    }
}

/// Merkt den Keyframe unter dem Zeiger für die Tooltip-Anzeige.
pub fn set_hovered(state: &mut AppState, uid: Option<u64>) {
    state.ui.hovered_keyframe = uid;
}

/// Übernimmt geänderte Konfigurationswerte des aktiven Pfads.
pub fn apply_config_patch(state: &mut AppState, patch: ConfigPatch) {
    let window = state.options.merge_window();
    let Some(path) = state.profile.active_path_mut() else {
        log::warn!("Kein aktiver Pfad für Konfigurationsänderung");
        return;
    };
    let Some(command) = EditCommand::update_config(path, patch) else {
        // Leerer oder wirkungsloser Patch
        return;
    };
    state.history.execute(command, path, window);
}
