//! Die zentrale Pfad-Datenstruktur mit Segmenten, Keyframes und Sample-Cache.

use super::keyframe::Keyframe;
use super::sampling::{resample, SampledCurve};
use serde::{Deserialize, Serialize};

/// Beschreibt ein Segment eines Pfads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDef {
    /// Anzahl der Sample-Punkte dieses Segments
    pub sample_count: usize,
}

impl SegmentDef {
    /// Erstellt ein Segment mit der gegebenen Sample-Anzahl
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }
}

/// Konfigurationswerte eines Pfads, auf die die Kurven skaliert werden
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Geschwindigkeit bei normalisiertem Wert 0.0
    pub speed_min: f32,
    /// Geschwindigkeit bei normalisiertem Wert 1.0
    pub speed_max: f32,
    /// Biegerate bei normalisiertem Wert 1.0
    pub bent_rate_max: f32,
    /// Anfang des Biegeraten-Bereichs, normalisiert über den ganzen Pfad
    pub bent_range_start: f32,
    /// Ende des Biegeraten-Bereichs, normalisiert über den ganzen Pfad
    pub bent_range_end: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            speed_min: 5.0,
            speed_max: 40.0,
            bent_rate_max: 0.5,
            bent_range_start: 0.0,
            bent_range_end: 1.0,
        }
    }
}

/// Partielles Update einzelner Konfigurationsfelder.
/// `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigPatch {
    /// Neue Minimal-Geschwindigkeit
    pub speed_min: Option<f32>,
    /// Neue Maximal-Geschwindigkeit
    pub speed_max: Option<f32>,
    /// Neue Maximal-Biegerate
    pub bent_rate_max: Option<f32>,
    /// Neuer Bereichs-Anfang
    pub bent_range_start: Option<f32>,
    /// Neues Bereichs-Ende
    pub bent_range_end: Option<f32>,
}

impl ConfigPatch {
    /// Wendet den Patch auf eine Konfiguration an
    pub fn apply_to(&self, config: &mut PathConfig) {
        if let Some(v) = self.speed_min {
            config.speed_min = v;
        }
        if let Some(v) = self.speed_max {
            config.speed_max = v;
        }
        if let Some(v) = self.bent_rate_max {
            config.bent_rate_max = v;
        }
        if let Some(v) = self.bent_range_start {
            config.bent_range_start = v;
        }
        if let Some(v) = self.bent_range_end {
            config.bent_range_end = v;
        }
    }

    /// Liest den Vorher-Zustand genau der Felder, die dieser Patch ändert
    pub fn capture_from(&self, config: &PathConfig) -> Self {
        Self {
            speed_min: self.speed_min.map(|_| config.speed_min),
            speed_max: self.speed_max.map(|_| config.speed_max),
            bent_rate_max: self.bent_rate_max.map(|_| config.bent_rate_max),
            bent_range_start: self.bent_range_start.map(|_| config.bent_range_start),
            bent_range_end: self.bent_range_end.map(|_| config.bent_range_end),
        }
    }

    /// Überlagert diesen Patch mit einem neueren; neuere Felder gewinnen
    pub fn overlay(&self, newer: &Self) -> Self {
        Self {
            speed_min: newer.speed_min.or(self.speed_min),
            speed_max: newer.speed_max.or(self.speed_max),
            bent_rate_max: newer.bent_rate_max.or(self.bent_rate_max),
            bent_range_start: newer.bent_range_start.or(self.bent_range_start),
            bent_range_end: newer.bent_range_end.or(self.bent_range_end),
        }
    }

    /// Ob der Patch keine Felder ändert
    pub fn is_empty(&self) -> bool {
        self.speed_min.is_none()
            && self.speed_max.is_none()
            && self.bent_rate_max.is_none()
            && self.bent_range_start.is_none()
            && self.bent_range_end.is_none()
    }
}

/// Ein Bewegungsprofil-Pfad: Segmente, Keyframes, Konfiguration
/// und der daraus abgetastete Kurven-Cache.
///
/// Mutationen laufen über die Edit-Commands der History, die anschließend
/// `mark_edited` aufruft. Der Cache ist danach immer konsistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionPath {
    /// Anzeigename des Pfads
    pub name: String,
    /// Segmente in Pfad-Reihenfolge
    segments: Vec<SegmentDef>,
    /// Alle Keyframes (Reihenfolge = Einfüge-Reihenfolge)
    keyframes: Vec<Keyframe>,
    /// Skalierungs-Konfiguration
    pub config: PathConfig,
    /// Abgetastete Kurven, abgeleitet aus Keyframes + Config
    #[serde(skip)]
    cache: SampledCurve,
    /// Zählt jede Mutation; UI-Schichten erkennen daran veraltete Ableitungen
    #[serde(skip)]
    version: u64,
}

impl MotionPath {
    /// Erstellt einen neuen Pfad ohne Keyframes
    pub fn new(name: impl Into<String>, segments: Vec<SegmentDef>) -> Self {
        let mut path = Self {
            name: name.into(),
            segments,
            keyframes: Vec::new(),
            config: PathConfig::default(),
            cache: SampledCurve::default(),
            version: 0,
        };
        path.mark_edited();
        path
    }

    /// Segmente des Pfads
    pub fn segments(&self) -> &[SegmentDef] {
        &self.segments
    }

    /// Alle Keyframes in Einfüge-Reihenfolge
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Gesamtzahl der Sample-Punkte über alle Segmente
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|s| s.sample_count).sum()
    }

    /// Findet einen Keyframe per ID
    pub fn keyframe(&self, uid: u64) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| k.uid == uid)
    }

    /// Findet einen Keyframe per ID (mutierbar)
    pub fn keyframe_mut(&mut self, uid: u64) -> Option<&mut Keyframe> {
        self.keyframes.iter_mut().find(|k| k.uid == uid)
    }

    /// Nächste freie Keyframe-ID
    pub fn next_uid(&self) -> u64 {
        self.keyframes.iter().map(|k| k.uid).max().unwrap_or(0) + 1
    }

    /// Fügt einen Keyframe hinzu.
    /// Lehnt doppelte IDs und unbekannte Segmente ab.
    pub fn insert_keyframe(&mut self, keyframe: Keyframe) -> bool {
        if self.keyframe(keyframe.uid).is_some() {
            log::warn!("Keyframe-ID {} existiert bereits, Einfügen verworfen", keyframe.uid);
            return false;
        }
        if keyframe.segment >= self.segments.len() {
            log::warn!(
                "Keyframe {} verweist auf unbekanntes Segment {}, Einfügen verworfen",
                keyframe.uid,
                keyframe.segment
            );
            return false;
        }
        self.keyframes.push(keyframe);
        true
    }

    /// Entfernt einen Keyframe und gibt ihn zurück
    pub fn remove_keyframe(&mut self, uid: u64) -> Option<Keyframe> {
        let index = self.keyframes.iter().position(|k| k.uid == uid)?;
        Some(self.keyframes.remove(index))
    }

    /// Abgetastete Kurven (konsistent zum letzten `mark_edited`)
    pub fn sampled(&self) -> &SampledCurve {
        &self.cache
    }

    /// Aktuelle Mutations-Version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registriert eine Mutation: Version hochzählen, Kurven neu abtasten.
    /// Auch nach dem Deserialisieren einmal aufzurufen (Cache ist dann leer).
    pub fn mark_edited(&mut self) {
        self.version += 1;
        self.cache = resample(self);
    }
}
