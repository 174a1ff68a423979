//! Umkehrbare Edit-Commands auf einem Bewegungsprofil-Pfad.
//!
//! Jeder Command erfasst beim Erstellen den Vorher-Zustand, den er für
//! `revert` braucht. `apply` meldet zurück, ob tatsächlich etwas verändert
//! wurde; nicht angewendete Commands landen nicht in der History.

use crate::core::{ConfigPatch, DomainPos, Keyframe, KeyframePatch, MotionPath};

/// Ziel eines Commands für das Verschmelzen in der History
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTarget {
    /// Feld-Update eines bestimmten Keyframes
    Keyframe(u64),
    /// Update der Pfad-Konfiguration
    Config,
}

/// Ein umkehrbarer Bearbeitungsschritt
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Fügt einen vorab erzeugten Keyframe ein
    AddKeyframe {
        /// Der einzufügende Keyframe (ID bereits vergeben)
        keyframe: Keyframe,
    },
    /// Verschiebt einen Keyframe
    MoveKeyframe {
        /// Keyframe-ID
        uid: u64,
        /// Position vor dem Verschieben
        from: DomainPos,
        /// Zielposition
        to: DomainPos,
    },
    /// Entfernt einen Keyframe (vollständiger Snapshot für Undo)
    RemoveKeyframe {
        /// Der entfernte Keyframe
        keyframe: Keyframe,
    },
    /// Partielles Feld-Update eines Keyframes
    UpdateKeyframe {
        /// Keyframe-ID
        uid: u64,
        /// Die neuen Feldwerte
        patch: KeyframePatch,
        /// Vorher-Zustand derselben Felder
        previous: KeyframePatch,
    },
    /// Partielles Update der Pfad-Konfiguration
    UpdateConfig {
        /// Die neuen Feldwerte
        patch: ConfigPatch,
        /// Vorher-Zustand derselben Felder
        previous: ConfigPatch,
    },
}

impl EditCommand {
    /// Command: neuen Keyframe an der Position anlegen.
    /// Die ID wird hier vergeben, damit Redo denselben Keyframe erzeugt.
    pub fn add_keyframe(path: &MotionPath, pos: DomainPos) -> Self {
        Self::AddKeyframe {
            keyframe: Keyframe::new(path.next_uid(), pos),
        }
    }

    /// Command: Keyframe verschieben.
    /// `None` wenn die ID unbekannt ist oder sich nichts ändern würde.
    pub fn move_keyframe(path: &MotionPath, uid: u64, to: DomainPos) -> Option<Self> {
        let from = path.keyframe(uid)?.pos();
        if from == to {
            return None;
        }
        Some(Self::MoveKeyframe { uid, from, to })
    }

    /// Command: Keyframe entfernen. `None` wenn die ID unbekannt ist.
    pub fn remove_keyframe(path: &MotionPath, uid: u64) -> Option<Self> {
        Some(Self::RemoveKeyframe {
            keyframe: path.keyframe(uid)?.clone(),
        })
    }

    /// Command: Keyframe-Felder ändern.
    /// `None` wenn die ID unbekannt ist oder der Patch nichts ändern würde.
    pub fn update_keyframe(path: &MotionPath, uid: u64, patch: KeyframePatch) -> Option<Self> {
        if patch.is_empty() {
            return None;
        }
        let previous = patch.capture_from(path.keyframe(uid)?);
        if previous == patch {
            return None;
        }
        Some(Self::UpdateKeyframe {
            uid,
            patch,
            previous,
        })
    }

    /// Command: Konfiguration ändern. `None` wenn der Patch nichts ändern würde.
    pub fn update_config(path: &MotionPath, patch: ConfigPatch) -> Option<Self> {
        if patch.is_empty() {
            return None;
        }
        let previous = patch.capture_from(&path.config);
        if previous == patch {
            return None;
        }
        Some(Self::UpdateConfig { patch, previous })
    }

    /// Beschriftung für Statusleiste und Log
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddKeyframe { .. } => "Keyframe hinzufügen",
            Self::MoveKeyframe { .. } => "Keyframe verschieben",
            Self::RemoveKeyframe { .. } => "Keyframe entfernen",
            Self::UpdateKeyframe { .. } => "Keyframe ändern",
            Self::UpdateConfig { .. } => "Konfiguration ändern",
        }
    }

    /// Verschmelzungs-Ziel; `None` für Commands, die nie verschmolzen werden
    pub fn merge_target(&self) -> Option<MergeTarget> {
        match self {
            Self::UpdateKeyframe { uid, .. } => Some(MergeTarget::Keyframe(*uid)),
            Self::UpdateConfig { .. } => Some(MergeTarget::Config),
            _ => None,
        }
    }

    /// Übernimmt einen neueren Command gleichen Ziels in diesen Eintrag.
    /// Der erfasste Vorher-Zustand des ersten Commands bleibt erhalten,
    /// damit ein einzelnes Undo den Zustand vor der ganzen Serie herstellt.
    pub fn absorb(&mut self, newer: Self) {
        match (self, newer) {
            (
                Self::UpdateKeyframe {
                    patch, previous, ..
                },
                Self::UpdateKeyframe {
                    patch: new_patch,
                    previous: new_previous,
                    ..
                },
            ) => {
                // Felder, die erst der neuere Patch anfasst, übernehmen dessen Vorher-Zustand
                *previous = new_previous.overlay(previous);
                *patch = patch.overlay(&new_patch);
            }
            (
                Self::UpdateConfig { patch, previous },
                Self::UpdateConfig {
                    patch: new_patch,
                    previous: new_previous,
                },
            ) => {
                *previous = new_previous.overlay(previous);
                *patch = patch.overlay(&new_patch);
            }
            _ => log::warn!("absorb auf nicht verschmelzbaren Commands ignoriert"),
        }
    }

    /// Wendet den Command an. `false` wenn das Ziel fehlt.
    pub fn apply(&self, path: &mut MotionPath) -> bool {
        match self {
            Self::AddKeyframe { keyframe } => path.insert_keyframe(keyframe.clone()),
            Self::MoveKeyframe { uid, to, .. } => {
                let Some(kf) = path.keyframe_mut(*uid) else {
                    log::debug!("MoveKeyframe: Keyframe {} nicht gefunden", uid);
                    return false;
                };
                kf.set_pos(*to);
                true
            }
            Self::RemoveKeyframe { keyframe } => path.remove_keyframe(keyframe.uid).is_some(),
            Self::UpdateKeyframe { uid, patch, .. } => {
                let Some(kf) = path.keyframe_mut(*uid) else {
                    log::debug!("UpdateKeyframe: Keyframe {} nicht gefunden", uid);
                    return false;
                };
                patch.apply_to(kf);
                true
            }
            Self::UpdateConfig { patch, .. } => {
                patch.apply_to(&mut path.config);
                true
            }
        }
    }

    /// Macht den Command rückgängig. `false` wenn das Ziel fehlt.
    pub fn revert(&self, path: &mut MotionPath) -> bool {
        match self {
            Self::AddKeyframe { keyframe } => path.remove_keyframe(keyframe.uid).is_some(),
            Self::MoveKeyframe { uid, from, .. } => {
                let Some(kf) = path.keyframe_mut(*uid) else {
                    log::debug!("MoveKeyframe-Undo: Keyframe {} nicht gefunden", uid);
                    return false;
                };
                kf.set_pos(*from);
                true
            }
            Self::RemoveKeyframe { keyframe } => path.insert_keyframe(keyframe.clone()),
            Self::UpdateKeyframe { uid, previous, .. } => {
                let Some(kf) = path.keyframe_mut(*uid) else {
                    log::debug!("UpdateKeyframe-Undo: Keyframe {} nicht gefunden", uid);
                    return false;
                };
                previous.apply_to(kf);
                true
            }
            Self::UpdateConfig { previous, .. } => {
                previous.apply_to(&mut path.config);
                true
            }
        }
    }
}
