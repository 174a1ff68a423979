//! Kurvenfläche: zeichnet Bänder, Kurven und Marker und sammelt
//! Maus-, Tastatur- und Touch-Eingaben als `AppIntent`s.

mod input;
mod touch;

use crate::app::{AppIntent, AppState};
use crate::core::GraphConverter;
use glam::Vec2;

/// Zentrale Kurvenansicht mit Eingabe-Zustand.
pub struct GraphView {
    input: input::GraphInputState,
    touch: touch::TouchTracker,
}

impl GraphView {
    /// Erstellt eine neue Kurvenansicht ohne aktive Eingaben.
    pub fn new() -> Self {
        Self {
            input: input::GraphInputState::new(),
            touch: touch::TouchTracker::new(),
        }
    }

    /// Zeichnet die Kurvenfläche und gibt erzeugte Events zurück.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> Vec<AppIntent> {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(crate::ui::keyboard::collect_keyboard_intents(
            ui,
            state.ui.hovered_keyframe,
        ));

        paint_graph(ui, rect, state);

        events.extend(self.input.collect(ui, &response, state));
        events.extend(self.touch.collect(ui, &response));

        events
    }
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}

// ── Zeichnen ────────────────────────────────────────────────────

fn paint_graph(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

    let Some(path) = state.profile.active_path() else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Kein Pfad aktiv. File → Neu oder Open...",
            egui::FontId::proportional(20.0),
            egui::Color32::WHITE,
        );
        return;
    };

    // Converter direkt aus der Frame-Geometrie, nicht aus dem (um einen
    // Frame nachlaufenden) View-State
    let converter = GraphConverter::new(
        Vec2::new(rect.width(), rect.height()),
        state.view.scroll_offset,
        path,
        &state.options,
    );
    let options = &state.options;
    let to_screen =
        |p: Vec2| -> egui::Pos2 { egui::pos2(rect.min.x + p.x, rect.min.y + p.y) };

    paint_band_frames(&painter, rect, &converter, options);
    paint_curves(&painter, rect, path, &converter, options, &to_screen);
    paint_markers(&painter, state, path, &converter, options, &to_screen);
}

/// Rahmen der beiden Anzeigebänder (Biegerate oben, Geschwindigkeit unten).
fn paint_band_frames(
    painter: &egui::Painter,
    rect: egui::Rect,
    converter: &GraphConverter,
    options: &crate::shared::EditorOptions,
) {
    let frame_color = color32(options.band_frame_color);
    let stroke = egui::Stroke::new(1.0, frame_color);

    let bent_rect = egui::Rect::from_min_size(
        egui::pos2(rect.min.x, rect.min.y + converter.bent_band_top()),
        egui::vec2(rect.width(), converter.bent_band_height()),
    );
    let speed_rect = egui::Rect::from_min_size(
        egui::pos2(rect.min.x, rect.min.y + converter.speed_band_top()),
        egui::vec2(rect.width(), converter.speed_band_height()),
    );

    painter.rect_stroke(bent_rect, 0.0, stroke, egui::StrokeKind::Inside);
    painter.rect_stroke(speed_rect, 0.0, stroke, egui::StrokeKind::Inside);
}

/// Geschwindigkeits- und Biegeratenkurve über alle Sample-Punkte.
/// Abschnittsgrenzen werden nicht verbunden.
fn paint_curves(
    painter: &egui::Painter,
    rect: egui::Rect,
    path: &crate::core::MotionPath,
    converter: &GraphConverter,
    options: &crate::shared::EditorOptions,
    to_screen: &impl Fn(Vec2) -> egui::Pos2,
) {
    let sampled = path.sampled();
    let points = &sampled.points;
    if points.len() < 2 {
        return;
    }

    let speed_stroke = egui::Stroke::new(
        options.curve_line_width_px,
        color32(options.curve_color_speed),
    );
    let bent_stroke = egui::Stroke::new(
        options.curve_line_width_px,
        color32(options.curve_color_bent),
    );

    for i in 0..points.len() - 1 {
        if points[i].is_last {
            continue;
        }
        let x0 = converter.to_px_number(i as f32);
        let x1 = converter.to_px_number((i + 1) as f32);
        if x1 < 0.0 || x0 > rect.width() {
            continue;
        }

        let speed_a = to_screen(Vec2::new(x0, converter.speed_value_y(points[i].speed)));
        let speed_b = to_screen(Vec2::new(x1, converter.speed_value_y(points[i + 1].speed)));
        painter.line_segment([speed_a, speed_b], speed_stroke);

        let bent_a = to_screen(Vec2::new(x0, converter.bent_value_y(points[i].bent_rate)));
        let bent_b = to_screen(Vec2::new(x1, converter.bent_value_y(points[i + 1].bent_rate)));
        painter.line_segment([bent_a, bent_b], bent_stroke);
    }
}

/// Keyframe-Marker im Geschwindigkeitsband, mit Hover-Hervorhebung
/// und Wertanzeige am Marker unter dem Zeiger.
fn paint_markers(
    painter: &egui::Painter,
    state: &AppState,
    path: &crate::core::MotionPath,
    converter: &GraphConverter,
    options: &crate::shared::EditorOptions,
    to_screen: &impl Fn(Vec2) -> egui::Pos2,
) {
    let outline = egui::Stroke::new(1.5, color32(options.marker_outline_color));

    for keyframe in path.keyframes() {
        let center = to_screen(converter.to_px(&keyframe.pos()));
        let hovered = state.ui.hovered_keyframe == Some(keyframe.uid);

        let fill = if hovered {
            color32(options.marker_color_hover)
        } else if keyframe.follow_bent_rate {
            color32(options.marker_color_follow)
        } else {
            color32(options.marker_color_speed)
        };

        painter.circle_filled(center, options.marker_radius_px, fill);
        painter.circle_stroke(center, options.marker_radius_px, outline);

        if hovered {
            let config = &path.config;
            let speed =
                config.speed_min + keyframe.y_pos * (config.speed_max - config.speed_min);
            painter.text(
                center + egui::vec2(0.0, -(options.marker_radius_px + 4.0)),
                egui::Align2::CENTER_BOTTOM,
                format!("{:.1}", speed),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
    }
}

fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}
