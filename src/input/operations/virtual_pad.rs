use crate::input::types::{Button, PadSource, RawPadState, Stick};

/// Pad whose state is set programmatically: keyboard bridges and tests.
#[derive(Debug, Clone, Default)]
pub struct VirtualPad {
    state: RawPadState,
}

impl VirtualPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.state.buttons.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.state.buttons.remove(button);
    }

    pub fn set(&mut self, button: Button, down: bool) {
        self.state.buttons.set(button, down);
    }

    pub fn set_left_stick(&mut self, x: f32, y: f32) {
        self.state.left_stick = Stick::new(x, y);
    }

    pub fn set_right_stick(&mut self, x: f32, y: f32) {
        self.state.right_stick = Stick::new(x, y);
    }

    /// Release every button and center both sticks.
    pub fn clear(&mut self) {
        self.state = RawPadState::default();
    }

    pub fn state(&self) -> RawPadState {
        self.state
    }
}

impl PadSource for VirtualPad {
    fn poll(&mut self) -> RawPadState {
        self.state
    }
}
