//! Repräsentiert einen Keyframe auf einem Bewegungsprofil-Pfad.

use serde::{Deserialize, Serialize};

/// Eine Domänen-Position: Segment plus normalisierte Koordinaten.
///
/// `x_pos` läuft innerhalb des Segments von 0.0 (Anfang) bis 1.0 (Ende),
/// `y_pos` von 0.0 (Minimum) bis 1.0 (Maximum des Geschwindigkeits-Bands).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainPos {
    /// Index des Segments innerhalb des Pfads
    pub segment: usize,
    /// Normalisierte Position im Segment [0, 1]
    pub x_pos: f32,
    /// Normalisierter Wert [0, 1]
    pub y_pos: f32,
}

impl DomainPos {
    /// Erstellt eine neue Domänen-Position
    pub fn new(segment: usize, x_pos: f32, y_pos: f32) -> Self {
        Self {
            segment,
            x_pos,
            y_pos,
        }
    }
}

/// Ein vom Nutzer gesetzter Stützpunkt, der die abgeleiteten Kurven formt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Eindeutige ID innerhalb des Pfads
    pub uid: u64,
    /// Index des Segments, zu dem der Keyframe gehört
    pub segment: usize,
    /// Normalisierte Position im Segment [0, 1]
    pub x_pos: f32,
    /// Normalisierter Wert [0, 1]
    pub y_pos: f32,
    /// Ob die Biegeraten-Kurve diesem Keyframe folgt
    pub follow_bent_rate: bool,
}

impl Keyframe {
    /// Erstellt einen neuen Keyframe an der gegebenen Position
    pub fn new(uid: u64, pos: DomainPos) -> Self {
        Self {
            uid,
            segment: pos.segment,
            x_pos: pos.x_pos,
            y_pos: pos.y_pos,
            follow_bent_rate: false,
        }
    }

    /// Aktuelle Position des Keyframes als `DomainPos`
    pub fn pos(&self) -> DomainPos {
        DomainPos::new(self.segment, self.x_pos, self.y_pos)
    }

    /// Setzt die Position aus einer `DomainPos`
    pub fn set_pos(&mut self, pos: DomainPos) {
        self.segment = pos.segment;
        self.x_pos = pos.x_pos;
        self.y_pos = pos.y_pos;
    }
}

/// Partielles Update einzelner Keyframe-Felder.
///
/// `None`-Felder bleiben unverändert. Wird von den Edit-Commands benutzt,
/// um Vorher-Zustand und Änderung symmetrisch zu beschreiben.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyframePatch {
    /// Neue normalisierte X-Position
    pub x_pos: Option<f32>,
    /// Neuer normalisierter Wert
    pub y_pos: Option<f32>,
    /// Neuer Zustand des Biegeraten-Folgens
    pub follow_bent_rate: Option<bool>,
}

impl KeyframePatch {
    /// Patch, der nur das Biegeraten-Folgen setzt
    pub fn follow(value: bool) -> Self {
        Self {
            follow_bent_rate: Some(value),
            ..Self::default()
        }
    }

    /// Wendet den Patch auf einen Keyframe an
    pub fn apply_to(&self, keyframe: &mut Keyframe) {
        if let Some(x) = self.x_pos {
            keyframe.x_pos = x;
        }
        if let Some(y) = self.y_pos {
            keyframe.y_pos = y;
        }
        if let Some(follow) = self.follow_bent_rate {
            keyframe.follow_bent_rate = follow;
        }
    }

    /// Liest den Vorher-Zustand genau der Felder, die dieser Patch ändert
    pub fn capture_from(&self, keyframe: &Keyframe) -> Self {
        Self {
            x_pos: self.x_pos.map(|_| keyframe.x_pos),
            y_pos: self.y_pos.map(|_| keyframe.y_pos),
            follow_bent_rate: self.follow_bent_rate.map(|_| keyframe.follow_bent_rate),
        }
    }

    /// Überlagert diesen Patch mit einem neueren; neuere Felder gewinnen
    pub fn overlay(&self, newer: &Self) -> Self {
        Self {
            x_pos: newer.x_pos.or(self.x_pos),
            y_pos: newer.y_pos.or(self.y_pos),
            follow_bent_rate: newer.follow_bent_rate.or(self.follow_bent_rate),
        }
    }

    /// Ob der Patch keine Felder ändert
    pub fn is_empty(&self) -> bool {
        self.x_pos.is_none() && self.y_pos.is_none() && self.follow_bent_rate.is_none()
    }
}
