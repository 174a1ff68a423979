//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Editor-Optionen und ihre Default-Konstanten,
//! die von `core`, `app` und `ui` gemeinsam genutzt werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{GESTURE_SCROLL_THRESHOLD_PX, WHEEL_AXIS_BIAS};
