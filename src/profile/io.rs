//! JSON Import/Export für Bewegungsprofil-Dokumente.
//!
//! Beim Laden wird das Dokument validiert: strukturell kaputte Dateien
//! (doppelte Keyframe-IDs, Segmente ohne Samples) werden abgelehnt,
//! reparierbare Werte (Positionen außerhalb [0, 1], verwaiste Keyframes,
//! ungültige aktive Pfad-ID) werden mit Warnung korrigiert.

use super::MotionProfile;
use anyhow::{bail, Context, Result};
use std::collections::HashSet;

/// Parsed ein Profil aus einem JSON-String und validiert es
pub fn parse_profile(json_content: &str) -> Result<MotionProfile> {
    let mut profile: MotionProfile =
        serde_json::from_str(json_content).context("Profil-JSON konnte nicht gelesen werden")?;

    let path_ids: Vec<u64> = profile.paths().map(|(id, _)| id).collect();
    for id in &path_ids {
        validate_path(&mut profile, *id)?;
    }

    if let Some(active) = profile.active_path_id {
        if profile.path(active).is_none() {
            let fallback = path_ids.first().copied();
            log::warn!(
                "Aktive Pfad-ID {} unbekannt, verwende {:?}",
                active,
                fallback
            );
            profile.active_path_id = fallback;
        }
    } else {
        profile.active_path_id = path_ids.first().copied();
    }

    profile.refresh_caches();
    log::info!(
        "Profil geladen: {} Pfade, {} Keyframes",
        profile.path_count(),
        profile.keyframe_count()
    );
    Ok(profile)
}

/// Schreibt ein Profil als JSON-String
pub fn write_profile(profile: &MotionProfile) -> Result<String> {
    serde_json::to_string_pretty(profile).context("Profil konnte nicht serialisiert werden")
}

/// Validiert einen einzelnen Pfad; repariert was reparierbar ist.
fn validate_path(profile: &mut MotionProfile, id: u64) -> Result<()> {
    let path = profile
        .path_mut(id)
        .context("Pfad verschwand während der Validierung")?;

    if path.segments().iter().any(|s| s.sample_count == 0) {
        bail!("Pfad '{}' enthält ein Segment ohne Samples", path.name);
    }

    let mut seen = HashSet::new();
    let mut orphans = Vec::new();
    let segment_count = path.segments().len();
    for kf in path.keyframes() {
        if !seen.insert(kf.uid) {
            bail!("Pfad '{}' enthält doppelte Keyframe-ID {}", path.name, kf.uid);
        }
        if kf.segment >= segment_count {
            orphans.push(kf.uid);
        }
    }
    for uid in orphans {
        log::warn!(
            "Keyframe {} verweist auf unbekanntes Segment, wird verworfen",
            uid
        );
        path.remove_keyframe(uid);
    }

    let uids: Vec<u64> = path.keyframes().iter().map(|k| k.uid).collect();
    for uid in uids {
        let Some(kf) = path.keyframe_mut(uid) else {
            continue;
        };
        let clamped_x = kf.x_pos.clamp(0.0, 1.0);
        let clamped_y = kf.y_pos.clamp(0.0, 1.0);
        if clamped_x != kf.x_pos || clamped_y != kf.y_pos {
            log::warn!("Keyframe {} außerhalb [0, 1], Position begrenzt", uid);
            kf.x_pos = clamped_x;
            kf.y_pos = clamped_y;
        }
    }

    let config = &mut path.config;
    if config.speed_min > config.speed_max {
        log::warn!(
            "Pfad '{}': speed_min > speed_max, Werte vertauscht",
            path.name
        );
        std::mem::swap(&mut config.speed_min, &mut config.speed_max);
    }
    config.bent_range_start = config.bent_range_start.clamp(0.0, 1.0);
    config.bent_range_end = config.bent_range_end.clamp(0.0, 1.0);
    if config.bent_range_start > config.bent_range_end {
        log::warn!(
            "Pfad '{}': Biegeraten-Bereich verkehrt, Grenzen vertauscht",
            path.name
        );
        std::mem::swap(&mut config.bent_range_start, &mut config.bent_range_end);
    }

    Ok(())
}
