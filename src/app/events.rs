//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::gesture::TouchContact;
use crate::core::{ConfigPatch, DomainPos};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Neues leeres Profil anlegen
    NewProfileRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Mausrad über dem Canvas (rohes egui-Delta, beide Achsen)
    WheelScrolled { delta: glam::Vec2 },
    /// Scroll-Offset auf den Anfang zurücksetzen
    ScrollResetRequested,
    /// Aktueller Touch-Kontakt-Satz (bei jedem rohen Touch-Event)
    TouchFrame { contacts: Vec<TouchContact> },
    /// Primärklick auf freie Canvas-Fläche
    CanvasPressed { pos_px: glam::Vec2 },
    /// Keyframe-Marker wird gezogen (Position in Canvas-Pixeln)
    KeyframeDragMoved { uid: u64, pos_px: glam::Vec2 },
    /// Primärklick auf einen Keyframe-Marker
    KeyframeClicked { uid: u64 },
    /// Sekundärklick auf einen Keyframe-Marker
    KeyframeRemovalRequested { uid: u64 },
    /// Zeiger schwebt über einem Marker (None = keiner)
    KeyframeHovered { uid: Option<u64> },
    /// Konfigurationswert wurde im Panel bestätigt
    ConfigValueCommitted { patch: ConfigPatch },
    /// Anderer Pfad wurde im Panel ausgewählt
    ActivePathSelected { path_id: u64 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands beschreiben validierte Zustandsänderungen.
/// Sie entstehen ausschließlich im Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Anwendung beenden
    RequestExit,
    /// Neues Profil mit einem leeren Standard-Pfad anlegen
    NewProfile,
    /// Profil-Datei laden
    LoadProfile { path: String },
    /// Profil speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveProfile { path: Option<String> },
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Scroll-Offset um Delta verschieben (Vorzeichen bereits aufgelöst)
    ScrollBy { delta_px: f32 },
    /// Scroll-Offset auf den Anfang zurücksetzen
    ResetScroll,
    /// Touch-Kontakte durch die Gesten-Maschine laufen lassen
    ProcessTouch { contacts: Vec<TouchContact> },
    /// Neuen Keyframe an Domänen-Position hinzufügen
    AddKeyframeAtPosition { pos: DomainPos },
    /// Keyframe an neue Domänen-Position verschieben
    MoveKeyframe { uid: u64, to: DomainPos },
    /// Biegeraten-Folgen eines Keyframes umschalten
    ToggleFollowBentRate { uid: u64 },
    /// Keyframe entfernen
    RemoveKeyframe { uid: u64 },
    /// Schwebenden Keyframe setzen (Tooltip-Anzeige)
    SetHoveredKeyframe { uid: Option<u64> },
    /// Konfigurations-Patch auf den aktiven Pfad anwenden
    ApplyConfigPatch { patch: ConfigPatch },
    /// Aktiven Pfad wechseln
    SetActivePath { path_id: u64 },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
