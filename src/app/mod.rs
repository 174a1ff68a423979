//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod edit_commands;
pub mod events;
pub mod gesture;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Profil, View, UI).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use edit_commands::{EditCommand, MergeTarget};
pub use events::{AppCommand, AppIntent};
pub use gesture::{GestureEffect, GesturePhase, TouchContact, TouchInterpreter};
pub use history::EditHistory;
pub use state::{AppState, NumericFieldState, UiState, ViewState};
