//! Keyboard shortcuts for the output window.

use super::{PaneAction, ZoomStep};
use eframe::egui::{self, Key, Modifiers};

const POSITION_KEYS: [Key; 9] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

/// Pane position selected by a `Ctrl/Cmd+<digit>` key, zero-based.
pub(super) fn position_for_key(key: Key) -> Option<usize> {
    POSITION_KEYS.iter().position(|candidate| *candidate == key)
}

const ZOOM_KEYS: [Key; 4] = [Key::Plus, Key::Equals, Key::Minus, Key::Num0];

/// Zoom step bound to a `Ctrl/Cmd+<key>` chord.
pub(super) fn zoom_for_key(key: Key) -> Option<ZoomStep> {
    match key {
        Key::Plus | Key::Equals => Some(ZoomStep::In),
        Key::Minus => Some(ZoomStep::Out),
        Key::Num0 => Some(ZoomStep::Reset),
        _ => None,
    }
}

/// Consume shortcut key presses for this frame.
pub(super) fn actions_from_input(ctx: &egui::Context) -> Vec<PaneAction> {
    ctx.input_mut(|input| {
        let mut actions = Vec::new();
        for key in POSITION_KEYS {
            if input.consume_key(Modifiers::COMMAND, key) {
                if let Some(index) = position_for_key(key) {
                    actions.push(PaneAction::SelectPosition(index));
                }
            }
        }
        for key in ZOOM_KEYS {
            if input.consume_key(Modifiers::COMMAND, key) {
                if let Some(step) = zoom_for_key(key) {
                    actions.push(PaneAction::Zoom(step));
                }
            }
        }
        if input.consume_key(Modifiers::COMMAND, Key::A) {
            actions.push(PaneAction::SelectAll);
        }
        // Platform integrations deliver Ctrl/Cmd+C as a copy event, not a key press.
        if input.events.iter().any(|event| matches!(event, egui::Event::Copy)) {
            actions.push(PaneAction::Copy);
        }
        if input.consume_key(Modifiers::COMMAND, Key::S) {
            actions.push(PaneAction::Save);
        }
        actions
    })
}
