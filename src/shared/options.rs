//! Zentrale Konfiguration für den Motion-Profile-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Graph-Layout ────────────────────────────────────────────────────

/// Linkes Padding des Graph-Canvas in Pixeln (nicht-interaktiv).
pub const GRAPH_PAD_LEFT_PX: f32 = 50.0;
/// Rechtes Padding des Graph-Canvas in Pixeln (nicht-interaktiv).
pub const GRAPH_PAD_RIGHT_PX: f32 = 50.0;
/// Oberkante des Biegeraten-Bands als Anteil der Canvas-Höhe.
pub const BENT_BAND_TOP_FRACTION: f32 = 0.05;
/// Höhe des Biegeraten-Bands als Anteil der Canvas-Höhe.
pub const BENT_BAND_HEIGHT_FRACTION: f32 = 0.35;
/// Oberkante des Geschwindigkeits-Bands als Anteil der Canvas-Höhe.
pub const SPEED_BAND_TOP_FRACTION: f32 = 0.50;
/// Höhe des Geschwindigkeits-Bands als Anteil der Canvas-Höhe.
pub const SPEED_BAND_HEIGHT_FRACTION: f32 = 0.42;

// ── Marker ──────────────────────────────────────────────────────────

/// Zeichenradius der Keyframe-Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 6.0;
/// Pick-Radius für Klick und Drag in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 12.0;
/// Füllfarbe regulärer Keyframe-Marker (RGBA: Cyan).
pub const MARKER_COLOR_SPEED: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Füllfarbe für Keyframes mit aktivem Biegeraten-Folgen (RGBA: Gelb).
pub const MARKER_COLOR_FOLLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Outline-Farbe der Marker (RGBA: Dunkelgrau).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [0.15, 0.15, 0.15, 1.0];
/// Hervorhebungsfarbe für den Marker unter dem Zeiger (RGBA: Magenta).
pub const MARKER_COLOR_HOVER: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Linienstärke der Kurven-Polylinien in Pixeln.
pub const CURVE_LINE_WIDTH_PX: f32 = 2.0;
/// Farbe der Geschwindigkeitskurve (RGBA: Grün).
pub const CURVE_COLOR_SPEED: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe der Biegeraten-Kurve (RGBA: Orange).
pub const CURVE_COLOR_BENT: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Rahmen- und Segmentgrenzen-Farbe der Bänder (RGBA: Grau).
pub const BAND_FRAME_COLOR: [f32; 4] = [0.45, 0.45, 0.45, 1.0];

// ── Gesten und Scrollen ─────────────────────────────────────────────

/// Bewegungsschwelle für Touch-Scrollen in Pixeln (ca. 0.25 Zoll bei 96 dpi).
pub const GESTURE_SCROLL_THRESHOLD_PX: f32 = 24.0;
/// Achsen-Dominanzfaktor für Mausrad-Events: |dx| > Faktor·|dy| ⇒ horizontal.
pub const WHEEL_AXIS_BIAS: f32 = 1.5;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Tiefe des Undo-Stacks.
pub const HISTORY_MAX_DEPTH: usize = 100;
/// Zeitfenster in Millisekunden, in dem gleichartige Updates verschmolzen
/// werden. 0 deaktiviert das Verschmelzen vollständig.
pub const MERGE_WINDOW_MS: u64 = 250;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `motion_profile_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Layout ──────────────────────────────────────────────────
    /// Linkes Canvas-Padding in Pixeln
    pub pad_left_px: f32,
    /// Rechtes Canvas-Padding in Pixeln
    pub pad_right_px: f32,

    // ── Marker ──────────────────────────────────────────────────
    /// Zeichenradius der Keyframe-Marker in Pixeln
    pub marker_radius_px: f32,
    /// Pick-Radius für Klick und Drag in Pixeln
    pub marker_pick_radius_px: f32,
    /// Füllfarbe regulärer Keyframe-Marker
    pub marker_color_speed: [f32; 4],
    /// Füllfarbe für Keyframes mit aktivem Biegeraten-Folgen
    pub marker_color_follow: [f32; 4],
    /// Outline-Farbe der Marker
    pub marker_outline_color: [f32; 4],
    /// Hervorhebungsfarbe für den Marker unter dem Zeiger
    #[serde(default = "default_marker_color_hover")]
    pub marker_color_hover: [f32; 4],

    // ── Kurven ──────────────────────────────────────────────────
    /// Linienstärke der Kurven in Pixeln
    pub curve_line_width_px: f32,
    /// Farbe der Geschwindigkeitskurve
    pub curve_color_speed: [f32; 4],
    /// Farbe der Biegeraten-Kurve
    pub curve_color_bent: [f32; 4],
    /// Rahmenfarbe der Bänder
    pub band_frame_color: [f32; 4],

    // ── Gesten ──────────────────────────────────────────────────
    /// Bewegungsschwelle für Touch-Scrollen in Pixeln
    pub gesture_scroll_threshold_px: f32,
    /// Achsen-Dominanzfaktor für Mausrad-Events
    #[serde(default = "default_wheel_axis_bias")]
    pub wheel_axis_bias: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Tiefe des Undo-Stacks
    pub history_max_depth: usize,
    /// Verschmelzungsfenster für gleichartige Updates in Millisekunden
    #[serde(default = "default_merge_window_ms")]
    pub merge_window_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pad_left_px: GRAPH_PAD_LEFT_PX,
            pad_right_px: GRAPH_PAD_RIGHT_PX,

            marker_radius_px: MARKER_RADIUS_PX,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
            marker_color_speed: MARKER_COLOR_SPEED,
            marker_color_follow: MARKER_COLOR_FOLLOW,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            marker_color_hover: MARKER_COLOR_HOVER,

            curve_line_width_px: CURVE_LINE_WIDTH_PX,
            curve_color_speed: CURVE_COLOR_SPEED,
            curve_color_bent: CURVE_COLOR_BENT,
            band_frame_color: BAND_FRAME_COLOR,

            gesture_scroll_threshold_px: GESTURE_SCROLL_THRESHOLD_PX,
            wheel_axis_bias: WHEEL_AXIS_BIAS,

            history_max_depth: HISTORY_MAX_DEPTH,
            merge_window_ms: MERGE_WINDOW_MS,
        }
    }
}

/// Serde-Default für `marker_color_hover` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_marker_color_hover() -> [f32; 4] {
    MARKER_COLOR_HOVER
}

/// Serde-Default für `wheel_axis_bias` (Abwärtskompatibilität).
fn default_wheel_axis_bias() -> f32 {
    WHEEL_AXIS_BIAS
}

/// Serde-Default für `merge_window_ms` (Abwärtskompatibilität).
fn default_merge_window_ms() -> u64 {
    MERGE_WINDOW_MS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("motion_profile_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("motion_profile_editor.toml")
    }

    /// Verschmelzungsfenster als `Duration`. `None` wenn deaktiviert (0 ms).
    pub fn merge_window(&self) -> Option<std::time::Duration> {
        if self.merge_window_ms == 0 {
            None
        } else {
            Some(std::time::Duration::from_millis(self.merge_window_ms))
        }
    }
}
