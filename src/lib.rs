//! Motion-Profile-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod profile;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditHistory, UiState, ViewState};
pub use core::{
    ConfigPatch, DomainPos, GraphConverter, Keyframe, KeyframePatch, MotionPath, PathConfig,
    SegmentDef,
};
pub use profile::{parse_profile, write_profile, MotionProfile};
pub use shared::EditorOptions;
