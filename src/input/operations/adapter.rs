// Double-buffered edge detection over polled pad states

use crate::config::{Deadzone, NavConfig};
use crate::input::pure::stick_buttons;
use crate::input::types::{Button, ButtonSet, Direction, RawPadState};

#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    buttons: ButtonSet,
    scroll: ButtonSet,
}

/// Per-frame view of the pad: level (`down`) and edge (`pressed`,
/// `released`) queries against the previous frame.
///
/// Left-stick deflection counts as the D-pad. Right-stick deflection is kept
/// apart as scroll input. There is no auto-repeat; holding a direction
/// produces exactly one `pressed` edge.
#[derive(Debug, Clone)]
pub struct PadInput {
    previous: Frame,
    current: Frame,
    /// Buttons whose press edge was observed since the last `rearm`
    armed: ButtonSet,
    left_deadzone: Deadzone,
    right_deadzone: Deadzone,
}

impl PadInput {
    pub fn new(config: &NavConfig) -> Self {
        Self::with_deadzones(config.left_deadzone, config.right_deadzone)
    }

    pub fn with_deadzones(left_deadzone: Deadzone, right_deadzone: Deadzone) -> Self {
        Self {
            previous: Frame::default(),
            current: Frame::default(),
            armed: ButtonSet::EMPTY,
            left_deadzone,
            right_deadzone,
        }
    }

    /// Shift the current frame to previous and take a new poll.
    pub fn update(&mut self, raw: &RawPadState) {
        self.previous = self.current;
        self.current = Frame {
            buttons: raw
                .buttons
                .union(stick_buttons(raw.left_stick, self.left_deadzone)),
            scroll: stick_buttons(raw.right_stick, self.right_deadzone),
        };
        for button in Button::ALL {
            if self.pressed(button) {
                self.armed.insert(button);
            }
        }
    }

    /// Forget press edges seen so far. A button already held when this is
    /// called will not produce a `clicked` on release.
    pub fn rearm(&mut self) {
        self.armed = ButtonSet::EMPTY;
    }

    pub fn down(&self, button: Button) -> bool {
        self.current.buttons.contains(button)
    }

    pub fn pressed(&self, button: Button) -> bool {
        self.current.buttons.contains(button) && !self.previous.buttons.contains(button)
    }

    pub fn released(&self, button: Button) -> bool {
        !self.current.buttons.contains(button) && self.previous.buttons.contains(button)
    }

    /// Release edge of a press that started while this adapter was armed.
    pub fn clicked(&self, button: Button) -> bool {
        self.released(button) && self.armed.contains(button)
    }

    pub fn any_down(&self) -> bool {
        !self.current.buttons.is_empty()
    }

    pub fn any_pressed(&self) -> bool {
        Button::ALL.into_iter().any(|b| self.pressed(b))
    }

    /// The directional press edge this frame, resolved Right, Left, Down, Up.
    pub fn direction_pressed(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|d| self.pressed(Button::from_direction(*d)))
    }

    /// Right-stick scroll edge this frame, same priority as `direction_pressed`.
    pub fn scroll_pressed(&self) -> Option<Direction> {
        Direction::PRIORITY.into_iter().find(|d| {
            let b = Button::from_direction(*d);
            self.current.scroll.contains(b) && !self.previous.scroll.contains(b)
        })
    }
}

impl Default for PadInput {
    fn default() -> Self {
        Self::new(&NavConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::Stick;

    fn state(buttons: &[Button]) -> RawPadState {
        RawPadState {
            buttons: buttons.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_press_edge_only_on_first_frame() {
        let mut input = PadInput::default();
        input.update(&state(&[Button::Confirm]));
        assert!(input.pressed(Button::Confirm));
        assert!(input.down(Button::Confirm));

        input.update(&state(&[Button::Confirm]));
        assert!(!input.pressed(Button::Confirm));
        assert!(input.down(Button::Confirm));

        input.update(&state(&[]));
        assert!(input.released(Button::Confirm));
        assert!(input.clicked(Button::Confirm));
        assert!(!input.down(Button::Confirm));
    }

    #[test]
    fn test_rearm_suppresses_click_of_held_button() {
        let mut input = PadInput::default();
        input.update(&state(&[Button::Confirm]));
        input.rearm();
        input.update(&state(&[Button::Confirm]));
        input.update(&state(&[]));
        assert!(input.released(Button::Confirm));
        assert!(!input.clicked(Button::Confirm));
    }

    #[test]
    fn test_left_stick_acts_as_dpad() {
        let mut input = PadInput::default();
        input.update(&RawPadState {
            left_stick: Stick::new(0.0, 0.9),
            ..Default::default()
        });
        assert_eq!(input.direction_pressed(), Some(Direction::Up));

        // holding the stick does not repeat
        input.update(&RawPadState {
            left_stick: Stick::new(0.0, 0.9),
            ..Default::default()
        });
        assert_eq!(input.direction_pressed(), None);
    }

    #[test]
    fn test_direction_priority() {
        let mut input = PadInput::default();
        input.update(&state(&[Button::Up, Button::Left]));
        assert_eq!(input.direction_pressed(), Some(Direction::Left));
    }

    #[test]
    fn test_right_stick_is_scroll_not_direction() {
        let mut input = PadInput::default();
        input.update(&RawPadState {
            right_stick: Stick::new(0.0, -0.9),
            ..Default::default()
        });
        assert_eq!(input.scroll_pressed(), Some(Direction::Down));
        assert_eq!(input.direction_pressed(), None);
        assert!(!input.any_down());
    }
}
