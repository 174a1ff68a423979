//! Optionen-Dialog für Farben, Größen und Eingabe-Schwellen.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Graph ───────────────────────────────────────
                    ui.collapsing("Graph", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Padding links (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pad_left_px)
                                        .range(0.0..=200.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Padding rechts (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pad_right_px)
                                        .range(0.0..=200.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienbreite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_line_width_px)
                                        .range(0.5..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Geschwindigkeitskurve:", &mut opts.curve_color_speed);
                        changed |= color_edit(ui, "Biegeratenkurve:", &mut opts.curve_color_bent);
                        changed |= color_edit(ui, "Band-Rahmen:", &mut opts.band_frame_color);
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_radius_px)
                                        .range(2.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_pick_radius_px)
                                        .range(4.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Standardfarbe:", &mut opts.marker_color_speed);
                        changed |= color_edit(ui, "Folgt Biegerate:", &mut opts.marker_color_follow);
                        changed |= color_edit(ui, "Umriss-Farbe:", &mut opts.marker_outline_color);
                        changed |= color_edit(ui, "Hover-Farbe:", &mut opts.marker_color_hover);
                    });

                    // ── Eingabe ─────────────────────────────────────
                    ui.collapsing("Eingabe", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Scroll-Schwelle (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.gesture_scroll_threshold_px)
                                        .range(1.0..=100.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Achsen-Bias (Rad):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.wheel_axis_bias)
                                        .range(1.0..=5.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── History ─────────────────────────────────────
                    ui.collapsing("History", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Max. Tiefe:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.history_max_depth)
                                        .range(0..=1000)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Merge-Fenster (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.merge_window_ms)
                                        .range(0..=2000)
                                        .speed(10.0),
                                )
                                .changed();
                        });
                        ui.label("0 deaktiviert das Verschmelzen");
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
