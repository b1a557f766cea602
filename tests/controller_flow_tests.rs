use glam::Vec2;
use schematic_capture::{
    AppCommand, AppController, AppIntent, AppState, DrawingMode, EntityRef, PinRef, Severity,
};

fn intent(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn place(controller: &mut AppController, state: &mut AppState, type_name: &str, pos: Vec2) -> u64 {
    intent(
        controller,
        state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::PlaceComponent(type_name.to_string()),
        },
    );
    intent(controller, state, AppIntent::CanvasClicked { screen_pos: pos });
    match state.selection.selected {
        Some(EntityRef::Component(id)) => id,
        other => panic!("Neues Bauteil sollte selektiert sein, war {other:?}"),
    }
}

fn draw_wire(controller: &mut AppController, state: &mut AppState, clicks: &[Vec2]) {
    intent(
        controller,
        state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::DrawWire,
        },
    );
    for &pos in clicks {
        intent(controller, state, AppIntent::CanvasClicked { screen_pos: pos });
    }
    intent(controller, state, AppIntent::FinishWireRequested);
}

#[test]
fn test_save_requested_without_path_opens_save_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(&mut controller, &mut state, AppIntent::SaveRequested);

    assert!(state.ui.show_save_file_dialog);
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert_eq!(last, &AppCommand::SaveFile { path: None });
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExit)
    );
}

#[test]
fn test_place_component_snaps_selects_and_diagnoses() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let id = place(&mut controller, &mut state, "AND", Vec2::new(103.0, 47.0));

    let component = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(component.position, Vec2::new(100.0, 50.0));
    assert_eq!(state.editor.mode, DrawingMode::Select);
    assert!(state.can_undo());
    // Beide Eingänge sind offen
    assert_eq!(state.error_count(), 2);
}

#[test]
fn test_wire_between_gates_connects_pins_and_clears_floating_input() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let not = place(&mut controller, &mut state, "NOT", Vec2::ZERO);
    let and = place(&mut controller, &mut state, "AND", Vec2::new(200.0, 0.0));
    assert_eq!(state.error_count(), 3);

    draw_wire(
        &mut controller,
        &mut state,
        &[Vec2::new(62.0, 24.0), Vec2::new(130.0, 20.0), Vec2::new(201.0, 16.0)],
    );

    assert_eq!(state.wire_count(), 1);
    let Some(EntityRef::Wire(wire_id)) = state.selection.selected else {
        panic!("Neue Leitung sollte selektiert sein");
    };
    let wire = state.schematic.wire(wire_id).expect("Leitung vorhanden");
    assert_eq!(wire.start_ref, Some(PinRef::new(not, "Y")));
    assert_eq!(wire.end_ref, Some(PinRef::new(and, "A")));
    assert_eq!(state.editor.mode, DrawingMode::DrawWire);
    // NOT.A und AND.B bleiben offen
    assert_eq!(state.error_count(), 2);
}

#[test]
fn test_secondary_click_finishes_wire() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    intent(
        &mut controller,
        &mut state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::DrawWire,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::CanvasClicked {
            screen_pos: Vec2::new(0.0, 0.0),
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::CanvasClicked {
            screen_pos: Vec2::new(50.0, 0.0),
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::CanvasSecondaryClicked {
            screen_pos: Vec2::new(50.0, 0.0),
        },
    );

    assert_eq!(state.wire_count(), 1);
    assert!(!state.editor.wire_tool.is_drawing());
}

#[test]
fn test_escape_escalates_from_wire_to_mode_to_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "NOT", Vec2::ZERO);

    intent(
        &mut controller,
        &mut state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::DrawWire,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::CanvasClicked {
            screen_pos: Vec2::new(200.0, 200.0),
        },
    );
    assert!(state.editor.wire_tool.is_drawing());

    intent(&mut controller, &mut state, AppIntent::CancelRequested);
    assert!(!state.editor.wire_tool.is_drawing());
    assert_eq!(state.editor.mode, DrawingMode::DrawWire);

    intent(&mut controller, &mut state, AppIntent::CancelRequested);
    assert_eq!(state.editor.mode, DrawingMode::Select);
    assert!(state.selection.selected.is_some());

    intent(&mut controller, &mut state, AppIntent::CancelRequested);
    assert!(state.selection.selected.is_none());
    assert_eq!(state.wire_count(), 0);
}

#[test]
fn test_drag_moves_component_with_single_history_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(&mut controller, &mut state, "AND", Vec2::new(100.0, 0.0));
    let history_before = state.history.len();

    intent(
        &mut controller,
        &mut state,
        AppIntent::DragStarted {
            screen_pos: Vec2::new(130.0, 25.0),
        },
    );
    for step in 1..=5 {
        intent(
            &mut controller,
            &mut state,
            AppIntent::DragUpdated {
                screen_pos: Vec2::new(130.0 + step as f32 * 6.0, 25.0 + step as f32 * 4.0),
            },
        );
    }
    intent(&mut controller, &mut state, AppIntent::DragEnded);

    let moved = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(moved.position, Vec2::new(130.0, 20.0));
    assert_eq!(state.history.len(), history_before + 1);

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    let restored = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(restored.position, Vec2::new(100.0, 0.0));
}

#[test]
fn test_click_without_drag_creates_no_history_entry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "AND", Vec2::ZERO);
    let history_before = state.history.len();

    intent(
        &mut controller,
        &mut state,
        AppIntent::DragStarted {
            screen_pos: Vec2::new(30.0, 25.0),
        },
    );
    intent(&mut controller, &mut state, AppIntent::DragEnded);

    assert_eq!(state.history.len(), history_before);
}

#[test]
fn test_delete_component_cascades_and_undo_restores_everything() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let not = place(&mut controller, &mut state, "NOT", Vec2::ZERO);
    place(&mut controller, &mut state, "AND", Vec2::new(200.0, 0.0));
    draw_wire(
        &mut controller,
        &mut state,
        &[Vec2::new(60.0, 25.0), Vec2::new(200.0, 15.0)],
    );
    let before = state.schematic.clone();

    intent(
        &mut controller,
        &mut state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::Select,
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::SelectEntityRequested {
            entity: EntityRef::Component(not),
        },
    );
    intent(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert_eq!(state.component_count(), 1);
    assert_eq!(state.wire_count(), 0);
    assert!(state.selection.selected.is_none());

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(*state.schematic, *before);

    intent(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.component_count(), 1);
    assert_eq!(state.wire_count(), 0);
}

#[test]
fn test_undo_clears_selection_of_removed_entity() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "OR", Vec2::ZERO);
    assert!(state.selection.selected.is_some());

    intent(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(state.component_count(), 0);
    assert!(state.selection.selected.is_none());
    assert!(state.diagnostics.is_empty());
    assert!(!state.can_undo());
    assert!(state.can_redo());
}

#[test]
fn test_rotate_and_value_edits_are_undoable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(&mut controller, &mut state, "RESISTOR", Vec2::ZERO);

    intent(&mut controller, &mut state, AppIntent::RotateSelectedRequested);
    intent(
        &mut controller,
        &mut state,
        AppIntent::SetComponentValueRequested {
            component_id: id,
            value: "4k7".to_string(),
        },
    );

    let component = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(component.rotation.degrees(), 90);
    assert_eq!(component.value, "4k7");

    intent(&mut controller, &mut state, AppIntent::UndoRequested);
    let component = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(component.value, "1k");
    assert_eq!(component.rotation.degrees(), 90);
}

#[test]
fn test_undo_and_redo_walk_a_mixed_edit_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = state.schematic.clone();

    // 1, 2: Bauteile platzieren
    let not = place(&mut controller, &mut state, "NOT", Vec2::ZERO);
    let and = place(&mut controller, &mut state, "AND", Vec2::new(200.0, 0.0));
    // 3: Leitung NOT.Y → AND.A
    draw_wire(
        &mut controller,
        &mut state,
        &[Vec2::new(60.0, 25.0), Vec2::new(200.0, 15.0)],
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::DrawingModeRequested {
            mode: DrawingMode::Select,
        },
    );
    // 4: AND verschieben
    intent(
        &mut controller,
        &mut state,
        AppIntent::DragStarted {
            screen_pos: Vec2::new(230.0, 25.0),
        },
    );
    intent(
        &mut controller,
        &mut state,
        AppIntent::DragUpdated {
            screen_pos: Vec2::new(260.0, 45.0),
        },
    );
    intent(&mut controller, &mut state, AppIntent::DragEnded);
    assert_eq!(state.selection.selected, Some(EntityRef::Component(and)));
    // 5: AND drehen
    intent(&mut controller, &mut state, AppIntent::RotateSelectedRequested);
    // 6: NOT umbenennen
    intent(
        &mut controller,
        &mut state,
        AppIntent::SetComponentValueRequested {
            component_id: not,
            value: "U7".to_string(),
        },
    );
    // 7: NOT samt Leitung löschen
    intent(
        &mut controller,
        &mut state,
        AppIntent::SelectEntityRequested {
            entity: EntityRef::Component(not),
        },
    );
    intent(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    let edited = state.schematic.clone();
    assert_eq!(edited.component_count(), 1);
    assert_eq!(edited.wire_count(), 0);
    let moved = edited.component(and).expect("AND vorhanden");
    assert_eq!(moved.position, Vec2::new(230.0, 20.0));
    assert_eq!(moved.rotation.degrees(), 90);

    let mutations = 7;
    for _ in 0..mutations {
        assert!(state.can_undo());
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    assert!(!state.can_undo());
    assert_eq!(*state.schematic, *initial);
    assert!(state.diagnostics.is_empty());

    for _ in 0..mutations {
        assert!(state.can_redo());
        intent(&mut controller, &mut state, AppIntent::RedoRequested);
    }
    assert!(!state.can_redo());
    assert_eq!(*state.schematic, *edited);
}

#[test]
fn test_default_history_keeps_every_step() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for i in 0..250 {
        let x = (i % 25) as f32 * 100.0;
        let y = (i / 25) as f32 * 100.0;
        place(&mut controller, &mut state, "NOT", Vec2::new(x, y));
    }
    assert_eq!(state.component_count(), 250);

    for _ in 0..250 {
        intent(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    assert_eq!(state.component_count(), 0);
    assert!(!state.can_undo());
}

#[test]
fn test_device_pixel_ratio_scales_pointer_to_world() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    intent(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: [800.0, 600.0],
            pixels_per_point: 2.0,
        },
    );

    // 206/94 physische Pixel = 103/47 logische Pixel → Grid (100, 50)
    let id = place(&mut controller, &mut state, "AND", Vec2::new(206.0, 94.0));
    let component = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(component.position, Vec2::new(100.0, 50.0));

    intent(
        &mut controller,
        &mut state,
        AppIntent::SurfaceResized {
            size: [800.0, 600.0],
            pixels_per_point: 1.0,
        },
    );
    let id = place(&mut controller, &mut state, "AND", Vec2::new(206.0, 94.0));
    let component = state.schematic.component(id).expect("Bauteil vorhanden");
    assert_eq!(component.position, Vec2::new(210.0, 90.0));
}

#[test]
fn test_zoom_and_grid_toggles() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    intent(&mut controller, &mut state, AppIntent::ZoomInRequested);
    approx::assert_relative_eq!(state.view.viewport.zoom_percent, 110.0);

    for _ in 0..20 {
        intent(&mut controller, &mut state, AppIntent::ZoomInRequested);
    }
    approx::assert_relative_eq!(state.view.viewport.zoom_percent, 200.0);

    intent(&mut controller, &mut state, AppIntent::ZoomResetRequested);
    approx::assert_relative_eq!(state.view.viewport.zoom_percent, 100.0);

    let show_grid = state.options.show_grid;
    intent(&mut controller, &mut state, AppIntent::ToggleGridRequested);
    assert_eq!(state.options.show_grid, !show_grid);
}

#[test]
fn test_save_and_load_roundtrip_through_files() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "NOT", Vec2::ZERO);
    place(&mut controller, &mut state, "XOR", Vec2::new(150.0, 0.0));
    draw_wire(
        &mut controller,
        &mut state,
        &[Vec2::new(60.0, 25.0), Vec2::new(150.0, 15.0)],
    );

    let path = std::env::temp_dir().join(format!(
        "schematic_flow_{}.json",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().into_owned();

    intent(
        &mut controller,
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: path_str.clone(),
        },
    );
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    let mut reloaded = AppState::new();
    intent(
        &mut controller,
        &mut reloaded,
        AppIntent::FileSelected {
            path: path_str.clone(),
        },
    );
    let _ = std::fs::remove_file(&path);

    assert_eq!(*reloaded.schematic, *state.schematic);
    assert_eq!(reloaded.diagnostics, state.diagnostics);
    assert!(!reloaded.can_undo());
}

#[test]
fn test_failed_load_leaves_model_untouched() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "AND", Vec2::ZERO);
    let before = state.schematic.clone();

    let path = std::env::temp_dir().join(format!(
        "schematic_broken_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, r#"{"components": [], "wires": 5}"#).expect("Testdatei schreibbar");

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err());
    assert_eq!(*state.schematic, *before);
    assert!(state.can_undo());
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|s| s.starts_with("Load failed")));
}

#[test]
fn test_new_project_resets_everything() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    place(&mut controller, &mut state, "AND", Vec2::ZERO);

    intent(&mut controller, &mut state, AppIntent::NewProjectRequested);

    assert!(state.schematic.is_empty());
    assert!(state.diagnostics.is_empty());
    assert!(!state.can_undo());
    assert!(state.selection.selected.is_none());
}

#[test]
fn test_diagnostic_entity_can_be_selected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let id = place(&mut controller, &mut state, "NOT", Vec2::ZERO);
    intent(&mut controller, &mut state, AppIntent::CancelRequested);
    assert!(state.selection.selected.is_none());

    let diagnostic = state
        .diagnostics
        .iter()
        .find(|d| d.severity == Severity::Error)
        .expect("Fehler-Diagnose vorhanden");
    let entity = diagnostic.entity().expect("Diagnose nennt eine Entität");
    intent(
        &mut controller,
        &mut state,
        AppIntent::SelectEntityRequested { entity },
    );

    assert_eq!(state.selection.selected, Some(EntityRef::Component(id)));
}
