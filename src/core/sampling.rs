//! Abtastung der abgeleiteten Kurven aus Keyframes und Pfad-Konfiguration.
//!
//! Die Geschwindigkeitskurve interpoliert stückweise linear zwischen allen
//! Keyframes eines Segments; die Biegeraten-Kurve nur zwischen Keyframes
//! mit aktivem `follow_bent_rate` und nur innerhalb des konfigurierten
//! Bereichs. Beide werden auf die Grenzen der `PathConfig` skaliert.

use super::keyframe::Keyframe;
use super::path::MotionPath;

/// Ein abgetasteter Kurvenpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Geschwindigkeit, skaliert auf `[speed_min, speed_max]`
    pub speed: f32,
    /// Biegerate, skaliert auf `[0, bent_rate_max]`
    pub bent_rate: f32,
    /// Ob dies der letzte Sample-Punkt seines Segments ist
    pub is_last: bool,
}

/// Zusammenhängender Sample-Bereich eines Segments im globalen Raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRun {
    /// Erster globaler Sample-Index des Segments
    pub first: usize,
    /// Anzahl der Sample-Punkte
    pub len: usize,
}

impl SegmentRun {
    /// Letzter globaler Sample-Index des Segments
    pub fn last(&self) -> usize {
        self.first + self.len.saturating_sub(1)
    }
}

/// Verortung eines Keyframes im globalen Sample-Raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeIndexing {
    /// Keyframe-ID
    pub uid: u64,
    /// Aufgelöstes Segment; `None` wenn der Keyframe aktuell
    /// keinem bekannten Segment zugeordnet werden kann
    pub segment: Option<usize>,
    /// Nächstgelegener globaler Sample-Index
    pub index: usize,
}

/// Ergebnis einer vollständigen Abtastung eines Pfads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    /// Alle Sample-Punkte, Segmente hintereinander
    pub points: Vec<CurvePoint>,
    /// Verortung aller Keyframes im Raster (Reihenfolge wie im Pfad)
    pub keyframe_indexes: Vec<KeyframeIndexing>,
    /// Sample-Bereiche pro Segment
    pub segment_runs: Vec<SegmentRun>,
}

impl SampledCurve {
    /// Gesamtzahl der Sample-Punkte
    pub fn sample_count(&self) -> usize {
        self.points.len()
    }

    /// Sample-Bereich eines Segments
    pub fn run_for(&self, segment: usize) -> Option<SegmentRun> {
        self.segment_runs.get(segment).copied()
    }

    /// Verortung eines Keyframes per ID
    pub fn indexing_for(&self, uid: u64) -> Option<KeyframeIndexing> {
        self.keyframe_indexes.iter().find(|k| k.uid == uid).copied()
    }
}

/// Tastet den Pfad vollständig ab.
pub fn resample(path: &MotionPath) -> SampledCurve {
    let mut segment_runs = Vec::with_capacity(path.segments().len());
    let mut first = 0usize;
    for seg in path.segments() {
        segment_runs.push(SegmentRun {
            first,
            len: seg.sample_count,
        });
        first += seg.sample_count;
    }
    let total = first;

    let config = &path.config;
    let speed_span = config.speed_max - config.speed_min;

    let mut points = Vec::with_capacity(total);
    for (seg_idx, run) in segment_runs.iter().enumerate() {
        let mut speed_keys: Vec<&Keyframe> = path
            .keyframes()
            .iter()
            .filter(|k| k.segment == seg_idx)
            .collect();
        speed_keys.sort_by(|a, b| a.x_pos.total_cmp(&b.x_pos));
        let follow_keys: Vec<&Keyframe> = speed_keys
            .iter()
            .copied()
            .filter(|k| k.follow_bent_rate)
            .collect();

        for i in 0..run.len {
            let t = if run.len > 1 {
                i as f32 / (run.len - 1) as f32
            } else {
                0.0
            };
            let global_frac = if total > 1 {
                (run.first + i) as f32 / (total - 1) as f32
            } else {
                0.0
            };

            let speed_norm = interpolate(&speed_keys, t, 1.0);
            let bent_norm = if global_frac < config.bent_range_start
                || global_frac > config.bent_range_end
            {
                0.0
            } else {
                interpolate(&follow_keys, t, 0.0)
            };

            points.push(CurvePoint {
                speed: config.speed_min + speed_norm * speed_span,
                bent_rate: bent_norm * config.bent_rate_max,
                is_last: i + 1 == run.len,
            });
        }
    }

    let keyframe_indexes = path
        .keyframes()
        .iter()
        .map(|k| index_keyframe(k, &segment_runs))
        .collect();

    SampledCurve {
        points,
        keyframe_indexes,
        segment_runs,
    }
}

/// Stückweise lineare Interpolation über nach `x_pos` sortierte Keyframes.
/// Vor dem ersten bzw. nach dem letzten Keyframe wird flach fortgesetzt.
fn interpolate(sorted: &[&Keyframe], t: f32, default: f32) -> f32 {
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return default;
    };
    if t <= first.x_pos {
        return first.y_pos;
    }
    if t >= last.x_pos {
        return last.y_pos;
    }

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.x_pos {
            let span = b.x_pos - a.x_pos;
            if span < f32::EPSILON {
                return b.y_pos;
            }
            let f = (t - a.x_pos) / span;
            return a.y_pos + f * (b.y_pos - a.y_pos);
        }
    }
    last.y_pos
}

/// Verortet einen Keyframe im globalen Raster.
fn index_keyframe(keyframe: &Keyframe, runs: &[SegmentRun]) -> KeyframeIndexing {
    let Some(run) = runs.get(keyframe.segment).filter(|r| r.len > 0) else {
        return KeyframeIndexing {
            uid: keyframe.uid,
            segment: None,
            index: 0,
        };
    };

    let x = keyframe.x_pos.clamp(0.0, 1.0);
    let index = run.first + (x * (run.len - 1) as f32).round() as usize;
    KeyframeIndexing {
        uid: keyframe.uid,
        segment: Some(keyframe.segment),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyframe::DomainPos;
    use crate::core::path::SegmentDef;
    use approx::assert_relative_eq;

    fn path_with(segments: Vec<usize>, keyframes: Vec<Keyframe>) -> MotionPath {
        let mut path = MotionPath::new(
            "Test",
            segments.into_iter().map(SegmentDef::new).collect(),
        );
        for kf in keyframes {
            assert!(path.insert_keyframe(kf), "Keyframe muss einfügbar sein");
        }
        path.mark_edited();
        path
    }

    #[test]
    fn test_segment_runs_are_contiguous() {
        let path = path_with(vec![4, 6, 2], vec![]);
        let curve = path.sampled();

        assert_eq!(curve.segment_runs.len(), 3);
        assert_eq!(curve.run_for(0), Some(SegmentRun { first: 0, len: 4 }));
        assert_eq!(curve.run_for(1), Some(SegmentRun { first: 4, len: 6 }));
        assert_eq!(curve.run_for(2), Some(SegmentRun { first: 10, len: 2 }));
        assert_eq!(curve.sample_count(), 12);
    }

    #[test]
    fn test_empty_segment_samples_at_speed_max() {
        let path = path_with(vec![5], vec![]);
        let max = path.config.speed_max;

        for point in &path.sampled().points {
            assert_relative_eq!(point.speed, max);
            assert_relative_eq!(point.bent_rate, 0.0);
        }
    }

    #[test]
    fn test_is_last_marks_segment_ends() {
        let path = path_with(vec![3, 2], vec![]);
        let flags: Vec<bool> = path.sampled().points.iter().map(|p| p.is_last).collect();
        assert_eq!(flags, vec![false, false, true, false, true]);
    }

    #[test]
    fn test_speed_interpolates_between_keyframes() {
        // Keyframes bei t=0 (y=0) und t=1 (y=1): Geschwindigkeit steigt linear
        let path = path_with(
            vec![5],
            vec![
                Keyframe::new(1, DomainPos::new(0, 0.0, 0.0)),
                Keyframe::new(2, DomainPos::new(0, 1.0, 1.0)),
            ],
        );
        let cfg = path.config;
        let points = &path.sampled().points;

        assert_relative_eq!(points[0].speed, cfg.speed_min);
        assert_relative_eq!(points[4].speed, cfg.speed_max);
        let mid = cfg.speed_min + 0.5 * (cfg.speed_max - cfg.speed_min);
        assert_relative_eq!(points[2].speed, mid, epsilon = 1e-4);
    }

    #[test]
    fn test_speed_extends_flat_beyond_outer_keyframes() {
        let path = path_with(
            vec![11],
            vec![Keyframe::new(1, DomainPos::new(0, 0.5, 0.25))],
        );
        let cfg = path.config;
        let expected = cfg.speed_min + 0.25 * (cfg.speed_max - cfg.speed_min);

        for point in &path.sampled().points {
            assert_relative_eq!(point.speed, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_bent_rate_uses_only_follow_keyframes() {
        let mut path = path_with(
            vec![5],
            vec![
                Keyframe::new(1, DomainPos::new(0, 0.0, 0.4)),
                Keyframe::new(2, DomainPos::new(0, 1.0, 0.4)),
            ],
        );
        // Ohne follow-Keyframes bleibt die Biegerate auf 0
        assert_relative_eq!(path.sampled().points[2].bent_rate, 0.0);

        path.keyframe_mut(1).expect("Keyframe 1 fehlt").follow_bent_rate = true;
        path.keyframe_mut(2).expect("Keyframe 2 fehlt").follow_bent_rate = true;
        path.mark_edited();

        let expected = 0.4 * path.config.bent_rate_max;
        assert_relative_eq!(path.sampled().points[2].bent_rate, expected, epsilon = 1e-4);
    }

    #[test]
    fn test_bent_rate_zero_outside_configured_range() {
        let mut kf = Keyframe::new(1, DomainPos::new(0, 0.5, 1.0));
        kf.follow_bent_rate = true;
        let mut path = path_with(vec![11], vec![kf]);
        path.config.bent_range_start = 0.25;
        path.config.bent_range_end = 0.75;
        path.mark_edited();

        let points = &path.sampled().points;
        assert_relative_eq!(points[0].bent_rate, 0.0);
        assert_relative_eq!(points[10].bent_rate, 0.0);
        assert_relative_eq!(points[5].bent_rate, path.config.bent_rate_max, epsilon = 1e-4);
    }

    #[test]
    fn test_keyframe_indexing_rounds_to_nearest_sample() {
        let path = path_with(
            vec![10],
            vec![Keyframe::new(1, DomainPos::new(0, 0.4, 0.5))],
        );
        // 0.4 * 9 = 3.6 → Index 4
        let indexing = path.sampled().indexing_for(1).expect("Indexing fehlt");
        assert_eq!(indexing.segment, Some(0));
        assert_eq!(indexing.index, 4);
    }

    #[test]
    fn test_keyframe_indexing_in_second_segment_uses_global_index() {
        let path = path_with(
            vec![10, 5],
            vec![Keyframe::new(1, DomainPos::new(1, 0.5, 0.5))],
        );
        let indexing = path.sampled().indexing_for(1).expect("Indexing fehlt");
        assert_eq!(indexing.segment, Some(1));
        assert_eq!(indexing.index, 12);
    }

    #[test]
    fn test_single_sample_segment_does_not_divide_by_zero() {
        let path = path_with(vec![1], vec![]);
        assert_eq!(path.sampled().sample_count(), 1);
        assert!(path.sampled().points[0].is_last);
    }
}
