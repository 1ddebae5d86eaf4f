use engine::input_log;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonPhase {
    ButtonDown,
    ButtonUp,
}

/// Logical buttons the host maps from devices (mouse, `E`, `F`, controller buttons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionButton {
    Pointer,
    Primary,
    Secondary,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [
        ActionButton::Pointer,
        ActionButton::Primary,
        ActionButton::Secondary,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputEvent {
    pub phase: ButtonPhase,
    pub button: ActionButton,
}

impl InputEvent {
    pub fn down(button: ActionButton) -> InputEvent {
        InputEvent {
            phase: ButtonPhase::ButtonDown,
            button,
        }
    }

    pub fn up(button: ActionButton) -> InputEvent {
        InputEvent {
            phase: ButtonPhase::ButtonUp,
            button,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Throw the disc, or recall it if it is already thrown.
    FireOrRecall,
    /// Teleport to the thrown disc.
    ConfirmTeleport,
}

/// Which (phase, button) pair triggers each action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub fire_or_recall: InputEvent,
    pub teleport: InputEvent,
}

impl Default for InputBindings {
    fn default() -> Self {
        InputBindings {
            fire_or_recall: InputEvent::down(ActionButton::Pointer),
            teleport: InputEvent::down(ActionButton::Primary),
        }
    }
}

impl InputBindings {
    pub fn resolve(&self, event: InputEvent) -> Option<Action> {
        if event == self.fire_or_recall {
            Some(Action::FireOrRecall)
        } else if event == self.teleport {
            Some(Action::ConfirmTeleport)
        } else {
            input_log!(TRACE, "No binding for {:?}", event);
            None
        }
    }
}

/// Polled button state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputContext {
    pub pointer: bool,
    pub primary: bool,
    pub secondary: bool,
}

impl InputContext {
    pub fn is_pressed(&self, button: ActionButton) -> bool {
        match button {
            ActionButton::Pointer => self.pointer,
            ActionButton::Primary => self.primary,
            ActionButton::Secondary => self.secondary,
        }
    }

    pub fn set_pressed(&mut self, button: ActionButton, pressed: bool) {
        match button {
            ActionButton::Pointer => self.pointer = pressed,
            ActionButton::Primary => self.primary = pressed,
            ActionButton::Secondary => self.secondary = pressed,
        }
    }
}

/// Turns successive polled snapshots into press/release events.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    previous: InputContext,
}

impl InputTracker {
    pub fn new() -> InputTracker {
        InputTracker::default()
    }

    pub fn update(&mut self, current: &InputContext) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for button in ActionButton::ALL {
            let was_pressed = self.previous.is_pressed(button);
            let is_pressed = current.is_pressed(button);

            if is_pressed && !was_pressed {
                events.push(InputEvent::down(button));
            } else if !is_pressed && was_pressed {
                events.push(InputEvent::up(button));
            }
        }

        self.previous = *current;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.resolve(InputEvent::down(ActionButton::Pointer)),
            Some(Action::FireOrRecall)
        );
        assert_eq!(
            bindings.resolve(InputEvent::down(ActionButton::Primary)),
            Some(Action::ConfirmTeleport)
        );
    }

    #[test]
    fn test_release_and_unbound_buttons_are_ignored() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.resolve(InputEvent::up(ActionButton::Pointer)), None);
        assert_eq!(bindings.resolve(InputEvent::down(ActionButton::Secondary)), None);
    }

    #[test]
    fn test_tracker_reports_edges_once() {
        let mut tracker = InputTracker::new();
        let mut input = InputContext::default();

        input.pointer = true;
        assert_eq!(tracker.update(&input), vec![InputEvent::down(ActionButton::Pointer)]);

        // Held: no repeat.
        assert!(tracker.update(&input).is_empty());

        input.pointer = false;
        input.primary = true;
        assert_eq!(
            tracker.update(&input),
            vec![
                InputEvent::up(ActionButton::Pointer),
                InputEvent::down(ActionButton::Primary),
            ]
        );
    }
}
