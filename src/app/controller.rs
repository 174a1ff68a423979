//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::NewProfile => handlers::file_io::new_profile(state),
            AppCommand::LoadProfile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveProfile { path } => handlers::file_io::save(state, path)?,

            // === View & Scrollen ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ScrollBy { delta_px } => handlers::view::scroll_by(state, delta_px),
            AppCommand::ResetScroll => handlers::view::reset_scroll(state),
            AppCommand::SetActivePath { path_id } => handlers::view::set_active_path(state, path_id),

            // === Touch-Gesten ===
            AppCommand::ProcessTouch { contacts } => {
                handlers::gesture::process_touch(state, &contacts)
            }

            // === Editing ===
            AppCommand::AddKeyframeAtPosition { pos } => handlers::editing::add_keyframe(state, pos),
            AppCommand::MoveKeyframe { uid, to } => handlers::editing::move_keyframe(state, uid, to),
            AppCommand::ToggleFollowBentRate { uid } => {
                handlers::editing::toggle_follow_bent_rate(state, uid)
            }
            AppCommand::RemoveKeyframe { uid } => handlers::editing::remove_keyframe(state, uid),
            AppCommand::SetHoveredKeyframe { uid } => handlers::editing::set_hovered(state, uid),
            AppCommand::ApplyConfigPatch { patch } => {
                handlers::editing::apply_config_patch(state, patch)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
