// Analog stick to digital direction conversion

use crate::config::Deadzone;
use crate::input::types::{Button, ButtonSet, Stick};

/// Direction buttons a stick deflection counts as.
///
/// Axes are independent: a diagonal beyond both deadzones holds two
/// directions at once. The comparison is strict so a stick resting exactly
/// on the threshold reads as neutral.
pub fn stick_buttons(stick: Stick, deadzone: Deadzone) -> ButtonSet {
    let mut set = ButtonSet::EMPTY;
    if stick.x > deadzone.x {
        set.insert(Button::Right);
    } else if stick.x < -deadzone.x {
        set.insert(Button::Left);
    }
    if stick.y > deadzone.y {
        set.insert(Button::Up);
    } else if stick.y < -deadzone.y {
        set.insert(Button::Down);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    const DZ: Deadzone = Deadzone { x: 0.3, y: 0.3 };

    #[test]
    fn test_inside_deadzone_is_neutral() {
        assert!(stick_buttons(Stick::new(0.29, -0.3), DZ).is_empty());
        assert!(stick_buttons(Stick::new(0.0, 0.0), DZ).is_empty());
    }

    #[test]
    fn test_y_up_is_positive() {
        let set = stick_buttons(Stick::new(0.0, 0.8), DZ);
        assert!(set.contains(Button::Up));
        assert!(!set.contains(Button::Down));
    }

    #[test]
    fn test_diagonal_holds_two_directions() {
        let set = stick_buttons(Stick::new(-0.7, -0.7), DZ);
        assert!(set.contains(Button::Left));
        assert!(set.contains(Button::Down));
    }
}
