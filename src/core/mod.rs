//! Core-Domänentypen: Keyframes, Pfade, Abtastung, Koordinaten-Converter.

pub mod converter;
pub mod keyframe;
pub mod path;
pub mod sampling;

pub use converter::GraphConverter;
pub use keyframe::{DomainPos, Keyframe, KeyframePatch};
pub use path::{ConfigPatch, MotionPath, PathConfig, SegmentDef};
pub use sampling::{resample, CurvePoint, KeyframeIndexing, SampledCurve, SegmentRun};
