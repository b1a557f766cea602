//! Application State: zentrale Datenhaltung, aufgeteilt nach Bereichen.

mod app_state;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{DragState, DrawingMode, EditorState};
pub use selection::SelectionState;
pub use ui::{UiState, UNTITLED_PROJECT};
pub use view::ViewState;
