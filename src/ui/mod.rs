//! UI-Komponenten: Menü, Toolbar, Properties, Diagnosen, Input-Handling, Dialoge.

pub mod canvas;
pub mod diagnostics_panel;
pub mod dialogs;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialoge).
/// Keyboard-Shortcuts und Zeiger-Eingaben sind in eigene Dateien extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::paint_draw_commands;
pub use diagnostics_panel::render_diagnostics_panel;
pub use dialogs::handle_file_dialogs;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
