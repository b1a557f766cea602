//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Das Mapping ist rein: es liest den AppState (Modus, Selektion, Werkzeug),
//! verändert ihn aber nie.

use super::state::DrawingMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::EntityRef;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewProjectRequested => vec![AppCommand::NewProject],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::DrawingModeRequested { mode } => vec![AppCommand::SetDrawingMode { mode }],
        AppIntent::CanvasClicked { screen_pos } => {
            let world_pos = state.view.viewport.to_world(screen_pos);
            match &state.editor.mode {
                DrawingMode::Select => vec![AppCommand::SelectAt {
                    world_pos,
                    tolerance: state.hit_tolerance_world(),
                }],
                DrawingMode::PlaceComponent(type_name) => vec![AppCommand::PlaceComponent {
                    type_name: type_name.clone(),
                    world_pos,
                }],
                DrawingMode::DrawWire => vec![AppCommand::WireClick { world_pos }],
            }
        }
        AppIntent::CanvasSecondaryClicked { .. } => match &state.editor.mode {
            DrawingMode::DrawWire => vec![AppCommand::FinishWire],
            DrawingMode::PlaceComponent(_) => vec![AppCommand::SetDrawingMode {
                mode: DrawingMode::Select,
            }],
            DrawingMode::Select => vec![],
        },
        AppIntent::PointerMoved { screen_pos } => {
            if state.editor.wire_tool.is_drawing() {
                vec![AppCommand::UpdateWirePreview {
                    world_pos: state.view.viewport.to_world(screen_pos),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::DragStarted { screen_pos } => {
            if state.editor.mode == DrawingMode::Select {
                vec![AppCommand::BeginDrag {
                    world_pos: state.view.viewport.to_world(screen_pos),
                    tolerance: state.hit_tolerance_world(),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::DragUpdated { screen_pos } => {
            if state.editor.drag.is_some() {
                vec![AppCommand::UpdateDrag {
                    world_pos: state.view.viewport.to_world(screen_pos),
                }]
            } else {
                vec![]
            }
        }
        AppIntent::DragEnded => {
            if state.editor.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }

        AppIntent::FinishWireRequested => {
            if state.editor.wire_tool.is_drawing() {
                vec![AppCommand::FinishWire]
            } else {
                vec![]
            }
        }
        AppIntent::CancelRequested => map_cancel(state),
        AppIntent::DeleteSelectedRequested => {
            if state.selection.selected.is_some() {
                vec![AppCommand::DeleteSelected]
            } else {
                vec![]
            }
        }
        AppIntent::RotateSelectedRequested => match state.selection.selected {
            Some(EntityRef::Component(_)) => vec![AppCommand::RotateSelected],
            _ => vec![],
        },
        AppIntent::SetComponentValueRequested {
            component_id,
            value,
        } => vec![AppCommand::SetComponentValue {
            component_id,
            value,
        }],
        AppIntent::SetComponentRotationRequested {
            component_id,
            rotation,
        } => vec![AppCommand::SetComponentRotation {
            component_id,
            rotation,
        }],
        AppIntent::SelectEntityRequested { entity } => vec![AppCommand::SelectEntity { entity }],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ZoomResetRequested => vec![AppCommand::ResetZoom],
        AppIntent::ScrollZoom {
            steps,
            focus_screen,
        } => vec![AppCommand::ZoomBy {
            delta_percent: steps * state.options.scroll_zoom_step_percent,
            focus_screen,
        }],
        AppIntent::PanRequested { delta_logical } => vec![AppCommand::Pan { delta_logical }],
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],
        AppIntent::ToggleSnapRequested => vec![AppCommand::ToggleSnap],
        AppIntent::SurfaceResized {
            size,
            pixels_per_point,
        } => vec![AppCommand::SetSurfaceSize {
            size,
            pixels_per_point,
        }],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Stufenweise Escape-Logik: Leitung → Modus → Selektion.
fn map_cancel(state: &AppState) -> Vec<AppCommand> {
    if state.editor.wire_tool.is_drawing() {
        vec![AppCommand::CancelWire]
    } else if state.editor.mode != DrawingMode::Select {
        vec![AppCommand::SetDrawingMode {
            mode: DrawingMode::Select,
        }]
    } else if state.selection.selected.is_some() {
        vec![AppCommand::ClearSelection]
    } else {
        vec![]
    }
}
