//! Maus-Eingaben auf der Kurvenfläche: Klick, Drag, Hover, Scrollrad.

use crate::app::{AppIntent, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    /// Drag eines Keyframe-Markers
    MarkerDrag(u64),
}

/// Verwaltet den Maus-Eingabezustand der Kurvenfläche.
#[derive(Default)]
pub(super) struct GraphInputState {
    primary_drag: PrimaryDragMode,
}

impl GraphInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Maus-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        self.handle_hover(response, state, &mut events);
        self.handle_drag_start(ui, response, state);
        self.handle_drag_update(response, &mut events);
        self.handle_drag_end(response);
        self.handle_clicks(response, state, &mut events);
        self.handle_wheel(ui, response, &mut events);

        events
    }

    // ── Hover ───────────────────────────────────────────────────

    fn handle_hover(
        &self,
        response: &egui::Response,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        // Während eines Marker-Drags bleibt der Hover-Zustand stehen
        if self.primary_drag != PrimaryDragMode::None {
            return;
        }

        let picked = response
            .hover_pos()
            .and_then(|pos| state.pick_keyframe_at(to_local(pos, response)));

        if picked != state.ui.hovered_keyframe {
            events.push(AppIntent::KeyframeHovered { uid: picked });
        }
    }

    // ── Drag-Start ──────────────────────────────────────────────

    fn handle_drag_start(&mut self, ui: &egui::Ui, response: &egui::Response, state: &AppState) {
        if !response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition vor der
        // Drag-Schwelle, interact_pointer_pos() wäre bereits versetzt
        let press_pos = ui.input(|i| i.pointer.press_origin());
        let picked = press_pos.and_then(|pos| state.pick_keyframe_at(to_local(pos, response)));

        self.primary_drag = match picked {
            Some(uid) => PrimaryDragMode::MarkerDrag(uid),
            None => PrimaryDragMode::None,
        };
    }

    // ── Drag-Update ─────────────────────────────────────────────

    fn handle_drag_update(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        let PrimaryDragMode::MarkerDrag(uid) = self.primary_drag else {
            return;
        };
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::KeyframeDragMoved {
                uid,
                pos_px: to_local(pointer_pos, response),
            });
        }
    }

    // ── Drag-Ende ───────────────────────────────────────────────

    fn handle_drag_end(&mut self, response: &egui::Response) {
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.primary_drag = PrimaryDragMode::None;
        }
    }

    // ── Klick-Events ────────────────────────────────────────────

    fn handle_clicks(
        &mut self,
        response: &egui::Response,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let local = to_local(pointer_pos, response);
                match state.pick_keyframe_at(local) {
                    // Marker-Klick schaltet das Biegeraten-Folgen um
                    Some(uid) => events.push(AppIntent::KeyframeClicked { uid }),
                    // Freier Klick: Mapping entscheidet, ob hier ein
                    // Keyframe entstehen kann
                    None => events.push(AppIntent::CanvasPressed { pos_px: local }),
                }
            }
            self.primary_drag = PrimaryDragMode::None;
        }

        if response.clicked_by(egui::PointerButton::Secondary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                if let Some(uid) = state.pick_keyframe_at(to_local(pointer_pos, response)) {
                    events.push(AppIntent::KeyframeRemovalRequested { uid });
                }
            }
        }
    }

    // ── Scrollrad ───────────────────────────────────────────────

    fn handle_wheel(&self, ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.hovered() {
            return;
        }
        let delta = ui.input(|i| i.smooth_scroll_delta);
        if delta == egui::Vec2::ZERO {
            return;
        }
        events.push(AppIntent::WheelScrolled {
            delta: glam::Vec2::new(delta.x, delta.y),
        });
    }
}

fn to_local(pointer_pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
