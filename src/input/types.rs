use std::fmt;

/// Logical gamepad buttons the navigation layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Confirm,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    TabPrev,
    TabNext,
    Menu,
    Reset,
}

impl Button {
    pub const ALL: [Button; 10] = [
        Button::Confirm,
        Button::Cancel,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::TabPrev,
        Button::TabNext,
        Button::Menu,
        Button::Reset,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }

    pub fn from_direction(direction: Direction) -> Button {
        match direction {
            Direction::Up => Button::Up,
            Direction::Down => Button::Down,
            Direction::Left => Button::Left,
            Direction::Right => Button::Right,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Button::Up => Some(Direction::Up),
            Button::Down => Some(Direction::Down),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Cardinal navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which simultaneous directional presses are resolved.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for Down/Right, the directions that advance a cursor.
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Compact set of held buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet(u16);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn set(&mut self, button: Button, down: bool) {
        if down {
            self.insert(button);
        } else {
            self.remove(button);
        }
    }

    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: ButtonSet) -> ButtonSet {
        ButtonSet(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::EMPTY;
        for button in iter {
            set.insert(button);
        }
        set
    }
}

/// Normalized analog stick position, each axis in [-1, 1], y positive up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stick {
    pub x: f32,
    pub y: f32,
}

impl Stick {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn magnitude_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }
}

/// One raw poll of a gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPadState {
    pub buttons: ButtonSet,
    pub left_stick: Stick,
    pub right_stick: Stick,
}

impl RawPadState {
    /// Combine two sources: buttons are unioned, each stick keeps the larger deflection.
    pub fn merge(self, other: RawPadState) -> RawPadState {
        let pick = |a: Stick, b: Stick| {
            if b.magnitude_sq() > a.magnitude_sq() { b } else { a }
        };
        RawPadState {
            buttons: self.buttons.union(other.buttons),
            left_stick: pick(self.left_stick, other.left_stick),
            right_stick: pick(self.right_stick, other.right_stick),
        }
    }
}

/// Anything that can be polled once per frame for a raw pad state.
pub trait PadSource {
    fn poll(&mut self) -> RawPadState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_set_basics() {
        let mut set = ButtonSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Button::Confirm);
        set.insert(Button::Reset);
        assert!(set.contains(Button::Confirm));
        assert!(set.contains(Button::Reset));
        assert!(!set.contains(Button::Cancel));
        set.set(Button::Confirm, false);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Button::Reset]);
    }

    #[test]
    fn test_merge_keeps_stronger_stick() {
        let a = RawPadState {
            buttons: [Button::Up].into_iter().collect(),
            left_stick: Stick::new(0.2, 0.0),
            right_stick: Stick::default(),
        };
        let b = RawPadState {
            buttons: [Button::Confirm].into_iter().collect(),
            left_stick: Stick::new(0.0, -0.9),
            right_stick: Stick::default(),
        };
        let merged = a.merge(b);
        assert!(merged.buttons.contains(Button::Up));
        assert!(merged.buttons.contains(Button::Confirm));
        assert_eq!(merged.left_stick, Stick::new(0.0, -0.9));
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in Direction::PRIORITY {
            assert_eq!(Button::from_direction(dir).direction(), Some(dir));
        }
        assert_eq!(Button::Confirm.direction(), None);
    }
}
