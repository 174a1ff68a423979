//! Properties-Panel (rechte Seitenleiste) für Pfadwahl und Konfiguration.

use crate::app::{AppIntent, AppState};
use crate::core::ConfigPatch;

use super::widgets::validated_numeric_field;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Pfad");
            ui.separator();
            render_path_selector(ui, state, &mut events);

            ui.separator();
            ui.heading("Konfiguration");
            render_config_fields(ui, state, &mut events);

            ui.separator();
            render_keyframe_info(ui, state);
        });

    events
}

fn render_path_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let entries: Vec<(u64, String)> = state
        .profile
        .paths()
        .map(|(id, path)| (id, path.name.clone()))
        .collect();
    let active = state.profile.active_path_id;
    let selected_text = active
        .and_then(|id| entries.iter().find(|(entry_id, _)| *entry_id == id))
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| "—".to_string());

    egui::ComboBox::from_id_salt("active_path")
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for (id, name) in &entries {
                if ui.selectable_label(active == Some(*id), name).clicked() {
                    events.push(AppIntent::ActivePathSelected { path_id: *id });
                }
            }
        });
}

/// Konfigurationsfelder mit validierter Zahleneingabe.
/// Jeder Commit wird als [`ConfigPatch`] mit genau den geänderten
/// Feldern gemeldet.
fn render_config_fields(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    let Some(config) = state.profile.active_path().map(|p| p.config.clone()) else {
        ui.label("Kein Pfad aktiv");
        return;
    };
    let fields = &mut state.ui.config_fields;
    let mut patch = ConfigPatch::default();

    ui.horizontal(|ui| {
        ui.label("Geschw. min:");
        if let Some(value) = validated_numeric_field(
            ui,
            &mut fields.speed_min,
            config.speed_min,
            0.0..=config.speed_max,
            1.0,
        ) {
            patch.speed_min = Some(value);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Geschw. max:");
        if let Some(value) = validated_numeric_field(
            ui,
            &mut fields.speed_max,
            config.speed_max,
            config.speed_min..=500.0,
            1.0,
        ) {
            patch.speed_max = Some(value);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Biegerate max:");
        if let Some(value) = validated_numeric_field(
            ui,
            &mut fields.bent_rate_max,
            config.bent_rate_max,
            0.0..=10.0,
            0.1,
        ) {
            patch.bent_rate_max = Some(value);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Bereich Anfang:");
        if let Some(value) = validated_numeric_field(
            ui,
            &mut fields.bent_range_start,
            config.bent_range_start,
            0.0..=config.bent_range_end,
            0.05,
        ) {
            patch.bent_range_start = Some(value);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Bereich Ende:");
        if let Some(value) = validated_numeric_field(
            ui,
            &mut fields.bent_range_end,
            config.bent_range_end,
            config.bent_range_start..=1.0,
            0.05,
        ) {
            patch.bent_range_end = Some(value);
        }
    });

    if !patch.is_empty() {
        events.push(AppIntent::ConfigValueCommitted { patch });
    }
}

fn render_keyframe_info(ui: &mut egui::Ui, state: &AppState) {
    let Some(path) = state.profile.active_path() else {
        return;
    };
    let Some(uid) = state.ui.hovered_keyframe else {
        ui.label("Kein Keyframe unter dem Zeiger");
        return;
    };
    let Some(keyframe) = path.keyframe(uid) else {
        return;
    };

    ui.label(format!("Keyframe {}", keyframe.uid));
    ui.label(format!(
        "Abschnitt {} | x: {:.3} | y: {:.3}",
        keyframe.segment, keyframe.x_pos, keyframe.y_pos
    ));
    let follow = if keyframe.follow_bent_rate {
        "folgt Biegerate"
    } else {
        "nur Geschwindigkeit"
    };
    ui.label(follow);
}
