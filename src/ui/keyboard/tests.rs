use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event_full(
    event: egui::Event,
    modifiers: egui::Modifiers,
    selected: Option<EntityRef>,
    wire_is_drawing: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        modifiers,
        ..Default::default()
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, selected, wire_is_drawing);
        });
    });

    events
}

fn collect_with_key(key: egui::Key, selected: Option<EntityRef>) -> Vec<AppIntent> {
    collect_with_key_event_full(
        key_event(key, egui::Modifiers::default()),
        egui::Modifiers::default(),
        selected,
        false,
    )
}

fn collect_with_command(key: egui::Key, shift: bool) -> Vec<AppIntent> {
    let modifiers = egui::Modifiers {
        command: true,
        ctrl: true,
        shift,
        ..Default::default()
    };
    collect_with_key_event_full(key_event(key, modifiers), modifiers, None, false)
}

#[test]
fn test_delete_with_selection_emits_delete_intent() {
    let events = collect_with_key(egui::Key::Delete, Some(EntityRef::Wire(3)));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_delete_without_selection_emits_nothing() {
    let events = collect_with_key(egui::Key::Delete, None);
    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_escape_always_emits_cancel() {
    let events = collect_with_key(egui::Key::Escape, None);
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_enter_finishes_wire_only_while_drawing() {
    let idle = collect_with_key(egui::Key::Enter, None);
    assert!(idle.is_empty());

    let drawing = collect_with_key_event_full(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        egui::Modifiers::default(),
        None,
        true,
    );
    assert!(drawing
        .iter()
        .any(|event| matches!(event, AppIntent::FinishWireRequested)));
}

#[test]
fn test_rotate_requires_component_selection() {
    let on_wire = collect_with_key(egui::Key::R, Some(EntityRef::Wire(1)));
    assert!(on_wire.is_empty());

    let on_component = collect_with_key(egui::Key::R, Some(EntityRef::Component(1)));
    assert!(on_component
        .iter()
        .any(|event| matches!(event, AppIntent::RotateSelectedRequested)));
}

#[test]
fn test_ctrl_z_emits_undo_and_ctrl_shift_z_redo() {
    let undo = collect_with_command(egui::Key::Z, false);
    assert!(undo.iter().any(|e| matches!(e, AppIntent::UndoRequested)));
    assert!(!undo.iter().any(|e| matches!(e, AppIntent::RedoRequested)));

    let redo = collect_with_command(egui::Key::Z, true);
    assert!(redo.iter().any(|e| matches!(e, AppIntent::RedoRequested)));
    assert!(!redo.iter().any(|e| matches!(e, AppIntent::UndoRequested)));
}

#[test]
fn test_ctrl_s_distinguishes_save_and_save_as() {
    let save = collect_with_command(egui::Key::S, false);
    assert!(save.iter().any(|e| matches!(e, AppIntent::SaveRequested)));

    let save_as = collect_with_command(egui::Key::S, true);
    assert!(save_as.iter().any(|e| matches!(e, AppIntent::SaveAsRequested)));
    assert!(!save_as.iter().any(|e| matches!(e, AppIntent::SaveRequested)));
}

#[test]
fn test_g_toggles_grid() {
    let events = collect_with_key(egui::Key::G, None);
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ToggleGridRequested)));
}
