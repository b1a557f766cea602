//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::EntityRef;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    selected: Option<EntityRef>,
    wire_is_drawing: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_z, key_y, key_s, key_o, key_n) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::N),
        )
    });

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if modifiers.command && key_z && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }
    if modifiers.command && (key_y || (modifiers.shift && key_z)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_s {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }
    if modifiers.command && key_o {
        events.push(AppIntent::OpenFileRequested);
    }
    if modifiers.command && key_n {
        events.push(AppIntent::NewProjectRequested);
    }

    // Einzeltasten nicht auslösen, solange ein Textfeld den Fokus hat
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (key_escape, key_delete, key_enter, key_r, key_g) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::G),
        )
    });

    if key_escape {
        events.push(AppIntent::CancelRequested);
    }

    if key_delete && selected.is_some() {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_enter && wire_is_drawing {
        events.push(AppIntent::FinishWireRequested);
    }

    if key_r && !modifiers.command && matches!(selected, Some(EntityRef::Component(_))) {
        events.push(AppIntent::RotateSelectedRequested);
    }

    if key_g && !modifiers.command {
        events.push(AppIntent::ToggleGridRequested);
    }

    events
}

#[cfg(test)]
mod tests;
