//! UI-Komponenten: Menü, Parameter-Panel, Statusleiste, Input-Handling, Optionen.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` nur und liefert `AppIntent`s zurück;
/// mutiert wird ausschließlich über den Controller.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
