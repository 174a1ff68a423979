//! Koordinaten-Umrechnung zwischen Sample-Indizes und Canvas-Pixeln.
//!
//! Der Converter wird pro Frame aus Canvas-Größe, Scroll-Offset, Pfad und
//! Optionen aufgebaut und ist danach unveränderlich. Alle Layer (Painting,
//! Hit-Tests, Intent-Mapping) rechnen über dieselbe Instanz.

use super::keyframe::DomainPos;
use super::path::MotionPath;
use super::sampling::SegmentRun;
use crate::shared::options::{
    BENT_BAND_HEIGHT_FRACTION, BENT_BAND_TOP_FRACTION, SPEED_BAND_HEIGHT_FRACTION,
    SPEED_BAND_TOP_FRACTION,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Bildet Domänen-Positionen auf Canvas-Pixel ab und zurück.
///
/// Horizontal: `x = pad_left + index · point_width − scroll`, wobei
/// `point_width = (width − pad_left − pad_right) / (sample_count − 1)`.
/// Vertikal liegen zwei Bänder übereinander: oben die Biegerate,
/// unten die Geschwindigkeit mit den Keyframe-Markern.
#[derive(Debug, Clone)]
pub struct GraphConverter {
    width: f32,
    height: f32,
    pad_left: f32,
    pad_right: f32,
    point_width: f32,
    sample_count: usize,
    scroll: f32,
    segment_runs: Vec<SegmentRun>,
    speed_min: f32,
    speed_span: f32,
    bent_rate_max: f32,
}

impl GraphConverter {
    /// Baut einen Converter für die aktuelle Canvas-Größe und Scroll-Position
    pub fn new(size: Vec2, scroll: f32, path: &MotionPath, options: &EditorOptions) -> Self {
        let sample_count = path.sample_count();
        let content = (size.x - options.pad_left_px - options.pad_right_px).max(0.0);
        let point_width = if sample_count > 1 {
            content / (sample_count - 1) as f32
        } else {
            0.0
        };
        let config = &path.config;

        Self {
            width: size.x,
            height: size.y,
            pad_left: options.pad_left_px,
            pad_right: options.pad_right_px,
            point_width,
            sample_count,
            scroll,
            segment_runs: path.sampled().segment_runs.clone(),
            speed_min: config.speed_min,
            speed_span: config.speed_max - config.speed_min,
            bent_rate_max: config.bent_rate_max,
        }
    }

    /// Horizontaler Abstand zweier benachbarter Sample-Punkte in Pixeln
    pub fn point_width(&self) -> f32 {
        self.point_width
    }

    /// Gesamtzahl der Sample-Punkte
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Maximal erlaubter Scroll-Offset
    pub fn max_scroll(&self) -> f32 {
        if self.sample_count > 2 {
            self.point_width * (self.sample_count - 2) as f32
        } else {
            0.0
        }
    }

    /// Begrenzt einen Scroll-Offset auf `[0, max_scroll]`
    pub fn clamp_scroll(&self, scroll: f32) -> f32 {
        scroll.clamp(0.0, self.max_scroll())
    }

    /// Pixel-X eines (gebrochenen) globalen Sample-Index
    pub fn to_px_number(&self, index: f32) -> f32 {
        self.pad_left + index * self.point_width - self.scroll
    }

    /// Pixel-Position einer Domänen-Position (Marker-Band)
    pub fn to_px(&self, pos: &DomainPos) -> Vec2 {
        let x = self.to_px_number(self.fractional_index(pos));
        Vec2::new(x, self.speed_y(pos.y_pos))
    }

    /// Partielle Umkehrung: Pixel → Domänen-Position.
    ///
    /// `None` wenn der Punkt im Padding liegt, außerhalb des Marker-Bands
    /// oder (bei Scroll) jenseits des abgetasteten Bereichs.
    pub fn to_pos(&self, px: Vec2) -> Option<DomainPos> {
        if self.point_width <= 0.0 {
            return None;
        }
        if px.x < self.pad_left || px.x > self.width - self.pad_right {
            return None;
        }

        let index = (px.x - self.pad_left + self.scroll) / self.point_width;
        if index < 0.0 || index > (self.sample_count - 1) as f32 {
            return None;
        }

        let top = self.speed_band_top();
        let height = self.speed_band_height();
        if height <= 0.0 || px.y < top || px.y > top + height {
            return None;
        }
        let y_pos = (1.0 - (px.y - top) / height).clamp(0.0, 1.0);

        let (segment, run) = self
            .segment_runs
            .iter()
            .enumerate()
            .find(|(_, run)| index <= run.last() as f32)?;
        let x_pos = if run.len > 1 {
            ((index - run.first as f32) / (run.len - 1) as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(DomainPos::new(segment, x_pos, y_pos))
    }

    /// Gebrochener globaler Sample-Index einer Domänen-Position
    pub fn fractional_index(&self, pos: &DomainPos) -> f32 {
        let Some(run) = self.segment_runs.get(pos.segment) else {
            return 0.0;
        };
        run.first as f32 + pos.x_pos * run.len.saturating_sub(1) as f32
    }

    // ── Band-Geometrie (Canvas-lokal) ───────────────────────────────

    /// Oberkante des Biegeraten-Bands
    pub fn bent_band_top(&self) -> f32 {
        self.height * BENT_BAND_TOP_FRACTION
    }

    /// Höhe des Biegeraten-Bands
    pub fn bent_band_height(&self) -> f32 {
        self.height * BENT_BAND_HEIGHT_FRACTION
    }

    /// Oberkante des Geschwindigkeits-Bands
    pub fn speed_band_top(&self) -> f32 {
        self.height * SPEED_BAND_TOP_FRACTION
    }

    /// Höhe des Geschwindigkeits-Bands
    pub fn speed_band_height(&self) -> f32 {
        self.height * SPEED_BAND_HEIGHT_FRACTION
    }

    /// Pixel-Y eines normalisierten Werts im Geschwindigkeits-Band
    pub fn speed_y(&self, norm: f32) -> f32 {
        self.speed_band_top() + (1.0 - norm) * self.speed_band_height()
    }

    /// Pixel-Y eines absoluten Geschwindigkeitswerts
    pub fn speed_value_y(&self, speed: f32) -> f32 {
        let norm = if self.speed_span.abs() > f32::EPSILON {
            (speed - self.speed_min) / self.speed_span
        } else {
            0.0
        };
        self.speed_y(norm.clamp(0.0, 1.0))
    }

    /// Pixel-Y eines absoluten Biegeraten-Werts im oberen Band
    pub fn bent_value_y(&self, bent_rate: f32) -> f32 {
        let norm = if self.bent_rate_max.abs() > f32::EPSILON {
            (bent_rate / self.bent_rate_max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.bent_band_top() + (1.0 - norm) * self.bent_band_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path::SegmentDef;
    use approx::assert_relative_eq;

    /// Referenz-Szenario: 650 px breit, Paddings 50 px, ein Segment mit 10 Samples.
    fn converter_650(scroll: f32) -> GraphConverter {
        let path = MotionPath::new("Test", vec![SegmentDef::new(10)]);
        GraphConverter::new(Vec2::new(650.0, 400.0), scroll, &path, &EditorOptions::default())
    }

    #[test]
    fn test_point_width_in_reference_scenario() {
        let conv = converter_650(0.0);
        assert_relative_eq!(conv.point_width(), 550.0 / 9.0, epsilon = 1e-4);
    }

    #[test]
    fn test_first_and_last_sample_pixel() {
        let conv = converter_650(0.0);
        assert_relative_eq!(conv.to_px_number(0.0), 50.0);
        assert_relative_eq!(conv.to_px_number(9.0), 600.0, epsilon = 1e-3);
    }

    #[test]
    fn test_scroll_shifts_samples_left() {
        let conv = converter_650(100.0);
        assert_relative_eq!(conv.to_px_number(0.0), -50.0);
    }

    #[test]
    fn test_max_scroll_formula() {
        let conv = converter_650(0.0);
        assert_relative_eq!(conv.max_scroll(), (550.0 / 9.0) * 8.0, epsilon = 1e-3);
    }

    #[test]
    fn test_clamp_scroll_bounds() {
        let conv = converter_650(0.0);
        assert_relative_eq!(conv.clamp_scroll(-20.0), 0.0);
        assert_relative_eq!(conv.clamp_scroll(10_000.0), conv.max_scroll());
        assert_relative_eq!(conv.clamp_scroll(100.0), 100.0);
    }

    #[test]
    fn test_to_px_to_pos_roundtrip() {
        let conv = converter_650(0.0);
        let pos = DomainPos::new(0, 0.5, 0.5);

        let px = conv.to_px(&pos);
        let back = conv.to_pos(px).expect("Position muss auflösbar sein");

        assert_eq!(back.segment, 0);
        assert_relative_eq!(back.x_pos, 0.5, epsilon = 1e-4);
        assert_relative_eq!(back.y_pos, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_to_pos_rejects_padding() {
        let conv = converter_650(0.0);
        let y = conv.speed_y(0.5);

        assert!(conv.to_pos(Vec2::new(49.0, y)).is_none(), "linkes Padding");
        assert!(conv.to_pos(Vec2::new(601.0, y)).is_none(), "rechtes Padding");
    }

    #[test]
    fn test_to_pos_rejects_outside_marker_band() {
        let conv = converter_650(0.0);
        assert!(conv.to_pos(Vec2::new(325.0, 10.0)).is_none());
        assert!(conv.to_pos(Vec2::new(325.0, 399.0)).is_none());
    }

    #[test]
    fn test_to_pos_rejects_beyond_domain_when_scrolled() {
        let conv = converter_650((550.0 / 9.0) * 8.0);
        let y = conv.speed_y(0.5);

        // Bei maximalem Scroll liegt der letzte Sample bei pad_left + point_width;
        // weiter rechts ist kein abgetasteter Bereich mehr.
        assert!(conv.to_pos(Vec2::new(400.0, y)).is_none());
        assert!(conv.to_pos(Vec2::new(60.0, y)).is_some());
    }

    #[test]
    fn test_to_pos_resolves_second_segment() {
        let path = MotionPath::new("Test", vec![SegmentDef::new(10), SegmentDef::new(5)]);
        let conv = GraphConverter::new(
            Vec2::new(650.0, 400.0),
            0.0,
            &path,
            &EditorOptions::default(),
        );
        // Globaler Index 12 = Segment 1, Mitte (first=10, len=5)
        let x = conv.to_px_number(12.0);
        let pos = conv
            .to_pos(Vec2::new(x, conv.speed_y(0.5)))
            .expect("Position muss auflösbar sein");

        assert_eq!(pos.segment, 1);
        assert_relative_eq!(pos.x_pos, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_path_has_no_inverse() {
        let path = MotionPath::new("Leer", vec![SegmentDef::new(1)]);
        let conv = GraphConverter::new(
            Vec2::new(650.0, 400.0),
            0.0,
            &path,
            &EditorOptions::default(),
        );

        assert_relative_eq!(conv.max_scroll(), 0.0);
        assert!(conv.to_pos(Vec2::new(325.0, 284.0)).is_none());
    }

    #[test]
    fn test_y_axis_inverts_within_band() {
        let conv = converter_650(0.0);
        // y_pos 1.0 liegt oben im Band, y_pos 0.0 unten
        assert!(conv.speed_y(1.0) < conv.speed_y(0.0));
        let top_pos = conv
            .to_pos(Vec2::new(325.0, conv.speed_y(1.0)))
            .expect("Position muss auflösbar sein");
        assert_relative_eq!(top_pos.y_pos, 1.0, epsilon = 1e-4);
    }
}
