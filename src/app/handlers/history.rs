//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let Some(path) = state.profile.active_path_mut() else {
        return;
    };
    if let Some(label) = state.history.undo(path) {
        state.ui.status_message = Some(format!("Rückgängig: {}", label));
        log::info!("Undo ausgeführt: {}", label);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
    drop_stale_hover(state);
}

/// Wiederholt den zuletzt rückgängig gemachten Schritt, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let Some(path) = state.profile.active_path_mut() else {
        return;
    };
    if let Some(label) = state.history.redo(path) {
        state.ui.status_message = Some(format!("Wiederholt: {}", label));
        log::info!("Redo ausgeführt: {}", label);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
    drop_stale_hover(state);
}

/// Entfernt den Hover-Zustand, wenn der Keyframe nicht mehr existiert
/// (z.B. nach Undo eines Hinzufügens).
fn drop_stale_hover(state: &mut AppState) {
    let Some(uid) = state.ui.hovered_keyframe else {
        return;
    };
    let exists = state
        .profile
        .active_path()
        .is_some_and(|p| p.keyframe(uid).is_some());
    if !exists {
        state.ui.hovered_keyframe = None;
    }
}
