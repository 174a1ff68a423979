//! UI-Komponenten: Menü, Kurvenansicht, Properties, Dialoge.

pub mod dialogs;
pub mod graph;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialogs).
/// Modulare Aufteilung: Keyboard-Shortcuts, Eingabe-Logik und Touch-Tracking
/// sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
mod widgets;

pub use dialogs::handle_file_dialogs;
pub use graph::GraphView;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
