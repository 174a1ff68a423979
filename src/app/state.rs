//! Application State — zentrale Datenhaltung.

use super::gesture::TouchInterpreter;
use super::CommandLog;
use crate::core::GraphConverter;
use crate::profile::MotionProfile;
use crate::shared::EditorOptions;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Horizontaler Scroll-Offset in Pixel (0 = Anfang)
    pub scroll_offset: f32,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
            scroll_offset: 0.0,
        }
    }
}

/// Text-Puffer eines validierten Zahlenfeldes (UI-Zwischenzustand)
#[derive(Debug, Default)]
pub struct NumericFieldState {
    /// Aktueller Eingabetext
    pub buffer: String,
    /// Letzter akzeptierter Eingabetext (für Revert ungültiger Tasten)
    pub last_good: String,
    /// Modellwert, mit dem der Puffer zuletzt abgeglichen wurde
    pub synced_to: Option<f32>,
    /// Ob das Feld im letzten Frame den Fokus hatte
    pub had_focus: bool,
}

/// Eingabepuffer der Konfigurationsfelder im Properties-Panel
#[derive(Debug, Default)]
pub struct ConfigFieldBuffers {
    pub speed_min: NumericFieldState,
    pub speed_max: NumericFieldState,
    pub bent_rate_max: NumericFieldState,
    pub bent_range_start: NumericFieldState,
    pub bent_range_end: NumericFieldState,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Undo-Beschriftung, Fehler)
    pub status_message: Option<String>,
    /// Keyframe unter dem Zeiger (steuert die Tooltip-Anzeige)
    pub hovered_keyframe: Option<u64>,
    /// Eingabepuffer der Konfigurationsfelder
    pub config_fields: ConfigFieldBuffers,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            show_save_file_dialog: false,
            current_file_path: None,
            status_message: None,
            hovered_keyframe: None,
            config_fields: ConfigFieldBuffers::default(),
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das aktuell geladene Bewegungsprofil
    pub profile: MotionProfile,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Gesten-Zustandsmaschine für Touch-Eingaben
    pub gesture: TouchInterpreter,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Command-basiert)
    pub history: super::history::EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Schwellen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Standard-Profil
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit bereits geladenen Optionen.
    /// Gesten-Schwelle und History-Tiefe werden daraus übernommen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            profile: MotionProfile::with_default_path(),
            view: ViewState::new(),
            ui: UiState::new(),
            gesture: TouchInterpreter::new(options.gesture_scroll_threshold_px),
            command_log: CommandLog::new(),
            history: super::history::EditHistory::new_with_capacity(options.history_max_depth),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Anzahl der Keyframes des aktiven Pfads (für UI-Anzeige)
    pub fn keyframe_count(&self) -> usize {
        self.profile
            .active_path()
            .map_or(0, |p| p.keyframes().len())
    }

    /// Anzahl der Sample-Punkte des aktiven Pfads (für UI-Anzeige)
    pub fn sample_count(&self) -> usize {
        self.profile.active_path().map_or(0, |p| p.sample_count())
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Baut den Koordinaten-Converter für den aktuellen Frame.
    /// `None` wenn kein Pfad aktiv ist.
    pub fn graph_converter(&self) -> Option<GraphConverter> {
        let path = self.profile.active_path()?;
        Some(GraphConverter::new(
            Vec2::new(self.view.viewport_size[0], self.view.viewport_size[1]),
            self.view.scroll_offset,
            path,
            &self.options,
        ))
    }

    /// Findet den Keyframe-Marker unter der Pixel-Position.
    ///
    /// Bei mehreren Treffern im Pick-Radius gewinnt der nächstgelegene.
    pub fn pick_keyframe_at(&self, pos_px: Vec2) -> Option<u64> {
        let converter = self.graph_converter()?;
        let path = self.profile.active_path()?;
        let radius = self.options.marker_pick_radius_px;
        let mut best: Option<(u64, f32)> = None;
        for keyframe in path.keyframes() {
            let dist = converter.to_px(&keyframe.pos()).distance(pos_px);
            if dist <= radius && best.is_none_or(|(_, d)| dist < d) {
                best = Some((keyframe.uid, dist));
            }
        }
        best.map(|(uid, _)| uid)
    }

    /// Ersetzt das Dokument und setzt alle dokumentgebundenen Zustände
    /// zurück (History, Scroll, Hover, Statusmeldung).
    pub fn replace_profile(&mut self, profile: MotionProfile, file_path: Option<String>) {
        self.profile = profile;
        self.history.clear();
        self.view.scroll_offset = 0.0;
        self.ui.current_file_path = file_path;
        self.ui.hovered_keyframe = None;
        self.ui.status_message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
