//! Das Bewegungsprofil-Dokument: geordnete Pfade plus aktiver Pfad.
//!
//! Ein Profil enthält mehrere unabhängige Pfade; bearbeitet wird immer der
//! aktive. Die Reihenfolge der Pfade ist Teil des Dokuments und bleibt über
//! Speichern/Laden stabil.

pub mod io;

pub use io::{parse_profile, write_profile};

use crate::core::{MotionPath, SegmentDef};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aktuelle Format-Version der Profil-Dateien
pub const PROFILE_FORMAT_VERSION: u32 = 1;

/// Vollständiges Bewegungsprofil-Dokument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Format-Version der Datei
    pub version: u32,
    /// Alle Pfade, indexiert nach ihrer ID, in Dokument-Reihenfolge
    paths: IndexMap<u64, MotionPath>,
    /// ID des aktuell bearbeiteten Pfads
    pub active_path_id: Option<u64>,
}

impl MotionProfile {
    /// Erstellt ein leeres Profil ohne Pfade
    pub fn new() -> Self {
        Self {
            version: PROFILE_FORMAT_VERSION,
            paths: IndexMap::new(),
            active_path_id: None,
        }
    }

    /// Erstellt ein Profil mit einem leeren Standard-Pfad
    pub fn with_default_path() -> Self {
        let mut profile = Self::new();
        profile.add_path(MotionPath::new("Pfad 1", vec![SegmentDef::new(25)]));
        profile
    }

    /// Fügt einen Pfad hinzu und gibt seine ID zurück.
    /// Der erste Pfad wird automatisch aktiv.
    pub fn add_path(&mut self, path: MotionPath) -> u64 {
        let id = self.paths.keys().max().copied().unwrap_or(0) + 1;
        self.paths.insert(id, path);
        if self.active_path_id.is_none() {
            self.active_path_id = Some(id);
        }
        id
    }

    /// Pfad per ID
    pub fn path(&self, id: u64) -> Option<&MotionPath> {
        self.paths.get(&id)
    }

    /// Pfad per ID (mutierbar)
    pub fn path_mut(&mut self, id: u64) -> Option<&mut MotionPath> {
        self.paths.get_mut(&id)
    }

    /// Der aktuell aktive Pfad
    pub fn active_path(&self) -> Option<&MotionPath> {
        self.paths.get(&self.active_path_id?)
    }

    /// Der aktuell aktive Pfad (mutierbar)
    pub fn active_path_mut(&mut self) -> Option<&mut MotionPath> {
        let id = self.active_path_id?;
        self.paths.get_mut(&id)
    }

    /// Wechselt den aktiven Pfad. `false` wenn die ID unbekannt ist.
    pub fn set_active_path(&mut self, id: u64) -> bool {
        if self.paths.contains_key(&id) {
            self.active_path_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Alle Pfade in Dokument-Reihenfolge
    pub fn paths(&self) -> impl Iterator<Item = (u64, &MotionPath)> {
        self.paths.iter().map(|(id, p)| (*id, p))
    }

    /// Anzahl der Pfade
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Summe aller Keyframes über alle Pfade
    pub fn keyframe_count(&self) -> usize {
        self.paths.values().map(|p| p.keyframes().len()).sum()
    }

    /// Baut die Sample-Caches aller Pfade neu auf (nach dem Laden nötig)
    pub fn refresh_caches(&mut self) {
        for path in self.paths.values_mut() {
            path.mark_edited();
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_path_becomes_active() {
        let mut profile = MotionProfile::new();
        assert!(profile.active_path().is_none());

        let id = profile.add_path(MotionPath::new("A", vec![SegmentDef::new(5)]));
        assert_eq!(profile.active_path_id, Some(id));
        assert_eq!(profile.active_path().map(|p| p.name.as_str()), Some("A"));
    }

    #[test]
    fn test_path_ids_are_monotonic() {
        let mut profile = MotionProfile::new();
        let a = profile.add_path(MotionPath::new("A", vec![SegmentDef::new(5)]));
        let b = profile.add_path(MotionPath::new("B", vec![SegmentDef::new(5)]));
        assert!(b > a);
    }

    #[test]
    fn test_set_active_path_rejects_unknown_id() {
        let mut profile = MotionProfile::with_default_path();
        let before = profile.active_path_id;

        assert!(!profile.set_active_path(99));
        assert_eq!(profile.active_path_id, before);
    }
}
