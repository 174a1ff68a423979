//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Pixel-Koordinaten werden hier über den [`crate::core::GraphConverter`]
//! in Domänen-Positionen aufgelöst; nicht auflösbare Positionen (Padding,
//! außerhalb des Geschwindigkeitsbands) ergeben eine leere Command-Liste.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => {
            vec![AppCommand::SaveProfile { path: None }]
        }
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::NewProfileRequested => vec![AppCommand::NewProfile],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadProfile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveProfile { path: Some(path) }]
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::WheelScrolled { delta } => {
            // Achsen-Dominanz: nur deutlich horizontale Gesten scrollen
            // horizontal, ansonsten zählt die vertikale Komponente.
            let dominant = if delta.x.abs() > state.options.wheel_axis_bias * delta.y.abs() {
                delta.x
            } else {
                delta.y
            };
            if dominant == 0.0 {
                return Vec::new();
            }
            vec![AppCommand::ScrollBy {
                delta_px: -dominant,
            }]
        }
        AppIntent::ScrollResetRequested => vec![AppCommand::ResetScroll],
        AppIntent::TouchFrame { contacts } => vec![AppCommand::ProcessTouch { contacts }],
        AppIntent::CanvasPressed { pos_px } => {
            let Some(converter) = state.graph_converter() else {
                return Vec::new();
            };
            match converter.to_pos(pos_px) {
                Some(pos) => vec![AppCommand::AddKeyframeAtPosition { pos }],
                None => Vec::new(),
            }
        }
        AppIntent::KeyframeDragMoved { uid, pos_px } => {
            let Some(converter) = state.graph_converter() else {
                return Vec::new();
            };
            match converter.to_pos(pos_px) {
                Some(to) => vec![AppCommand::MoveKeyframe { uid, to }],
                None => Vec::new(),
            }
        }
        AppIntent::KeyframeClicked { uid } => vec![AppCommand::ToggleFollowBentRate { uid }],
        AppIntent::KeyframeRemovalRequested { uid } => vec![AppCommand::RemoveKeyframe { uid }],
        AppIntent::KeyframeHovered { uid } => vec![AppCommand::SetHoveredKeyframe { uid }],
        AppIntent::ConfigValueCommitted { patch } => vec![AppCommand::ApplyConfigPatch { patch }],
        AppIntent::ActivePathSelected { path_id } => vec![AppCommand::SetActivePath { path_id }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
