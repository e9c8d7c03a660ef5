// Input mapping from evdev codes to logical buttons

use crate::input::types::Button;
use evdev::KeyCode;

/// Map a gamepad key code to a logical button
pub fn map_key_to_button(code: KeyCode) -> Option<Button> {
    match code {
        // Face buttons
        KeyCode::BTN_SOUTH => Some(Button::Confirm),
        KeyCode::BTN_EAST => Some(Button::Cancel),

        // Shoulder buttons → Tab navigation
        KeyCode::BTN_TL => Some(Button::TabPrev),
        KeyCode::BTN_TR => Some(Button::TabNext),

        KeyCode::BTN_START => Some(Button::Menu),
        KeyCode::BTN_SELECT => Some(Button::Reset),

        // Pads that report the D-pad as buttons instead of a hat
        KeyCode::BTN_DPAD_UP => Some(Button::Up),
        KeyCode::BTN_DPAD_DOWN => Some(Button::Down),
        KeyCode::BTN_DPAD_LEFT => Some(Button::Left),
        KeyCode::BTN_DPAD_RIGHT => Some(Button::Right),

        _ => None,
    }
}

/// Map a hat axis value (-1, 0, 1) to the button it holds.
///
/// evdev reports HAT0Y negative for up.
pub fn map_hat(vertical: bool, value: i32) -> Option<Button> {
    match (vertical, value.signum()) {
        (false, -1) => Some(Button::Left),
        (false, 1) => Some(Button::Right),
        (true, -1) => Some(Button::Up),
        (true, 1) => Some(Button::Down),
        _ => None,
    }
}

/// Check if a key code is a navigation-related input
pub fn is_nav_key(code: KeyCode) -> bool {
    map_key_to_button(code).is_some()
}
