//! Handler für Touch-Gesten auf der Kurvenfläche.

use crate::app::gesture::{GestureEffect, TouchContact};
use crate::app::AppState;

/// Füttert den Gesten-Interpreter mit dem aktuellen Kontaktstand und
/// wendet die zurückgegebenen Effekte auf den State an.
pub fn process_touch(state: &mut AppState, contacts: &[TouchContact]) {
    let effects = state.gesture.handle_contacts(contacts);
    for effect in effects {
        match effect {
            GestureEffect::ScrollBy(delta_px) => super::view::scroll_by(state, delta_px),
            GestureEffect::TapAt(pos_px) => tap(state, pos_px),
        }
    }
}

/// Ein Tap wirkt wie ein Primärklick: auf einem Marker schaltet er das
/// Biegeraten-Folgen um, im freien Geschwindigkeitsband legt er einen
/// Keyframe an.
fn tap(state: &mut AppState, pos_px: glam::Vec2) {
    if let Some(uid) = state.pick_keyframe_at(pos_px) {
        super::editing::toggle_follow_bent_rate(state, uid);
        return;
    }
    let Some(converter) = state.graph_converter() else {
        return;
    };
    let Some(pos) = converter.to_pos(pos_px) else {
        log::debug!("Tap außerhalb des Bands verworfen");
        return;
    };
    super::editing::add_keyframe(state, pos);
}
