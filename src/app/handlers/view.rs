//! Handler für Viewport, Scrollen und Pfadwechsel.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe und hält den Scroll-Offset gültig.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    clamp_scroll(state);
}

/// Verschiebt den sichtbaren Ausschnitt horizontal um `delta_px`.
pub fn scroll_by(state: &mut AppState, delta_px: f32) {
    let Some(converter) = state.graph_converter() else {
        return;
    };
    state.view.scroll_offset = converter.clamp_scroll(state.view.scroll_offset + delta_px);
}

/// Setzt den Scroll-Offset auf den Anfang zurück.
pub fn reset_scroll(state: &mut AppState) {
    state.view.scroll_offset = 0.0;
}

/// Wechselt den aktiven Pfad; der Scroll-Offset beginnt dort wieder bei 0.
pub fn set_active_path(state: &mut AppState, path_id: u64) {
    if !state.profile.set_active_path(path_id) {
        log::warn!("Unbekannte Pfad-Id {}", path_id);
        return;
    }
    state.view.scroll_offset = 0.0;
    state.ui.hovered_keyframe = None;
    if let Some(path) = state.profile.active_path() {
        log::info!("Aktiver Pfad: {}", path.name);
    }
}

/// Begrenzt den aktuellen Scroll-Offset auf den gültigen Bereich.
pub fn clamp_scroll(state: &mut AppState) {
    let Some(converter) = state.graph_converter() else {
        return;
    };
    state.view.scroll_offset = converter.clamp_scroll(state.view.scroll_offset);
}
