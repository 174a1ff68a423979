//! Handler für Datei-Operationen (Öffnen, Speichern, neues Profil).
//! Alle Dateisystem-Zugriffe (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::profile::{self, MotionProfile};

/// Öffnet den Datei-Öffnen-Dialog über den UI-State.
pub fn request_open(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Datei-Speichern-Dialog über den UI-State.
pub fn request_save(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Ersetzt das Dokument durch ein frisches Standard-Profil.
pub fn new_profile(state: &mut AppState) {
    state.replace_profile(MotionProfile::with_default_path(), None);
    log::info!("Neues Profil angelegt");
}

/// Lädt ein Profil aus der übergebenen Datei in den AppState.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)?;
    let loaded = profile::io::parse_profile(&json)?;

    log::info!(
        "Profil geladen: {} Pfade, {} Keyframes ({})",
        loaded.path_count(),
        loaded.keyframe_count(),
        path
    );
    state.replace_profile(loaded, Some(path));
    Ok(())
}

/// Speichert das Profil.
///
/// `None` speichert unter dem aktuell bekannten Pfad oder öffnet den
/// Speichern-Dialog, wenn noch keiner bekannt ist. `Some(p)` speichert
/// explizit unter `p` und merkt sich den Pfad.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = match path {
        Some(p) => p,
        None => match state.ui.current_file_path.clone() {
            Some(p) => p,
            None => {
                request_save(state);
                return Ok(());
            }
        },
    };

    let json = profile::io::write_profile(&state.profile)?;
    std::fs::write(&target, json)?;
    state.ui.current_file_path = Some(target.clone());
    state.ui.status_message = Some(format!("Gespeichert: {}", target));
    log::info!("Profil gespeichert: {}", target);
    Ok(())
}
