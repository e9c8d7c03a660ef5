// Capability trait implemented by every node kind the navigator can focus

use crate::nav::types::{Direction, GridLayout};

/// What a widget did with an input the navigator offered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Not handled; the navigator applies its default behavior
    Ignored,
    /// Handled, nothing observable changed
    Consumed,
    /// Handled and the widget's value changed
    ValueChanged,
}

impl Capture {
    pub fn is_captured(self) -> bool {
        !matches!(self, Capture::Ignored)
    }
}

/// Read-only snapshot a renderer draws from.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    Label(String),
    Button {
        label: String,
    },
    CheckBox {
        label: String,
        checked: bool,
    },
    RadioButton {
        label: String,
        checked: bool,
    },
    Slider {
        label: String,
        value: i32,
        min: i32,
        max: i32,
    },
    List {
        items: Vec<String>,
        locked: Vec<usize>,
        selected: Option<usize>,
        first_visible: usize,
        visible_rows: usize,
    },
    DropDown {
        items: Vec<String>,
        selected: Option<usize>,
        open: bool,
    },
}

/// Callbacks the navigator drives on a focusable node.
///
/// Every hook defaults to a no-op so a widget only overrides what it reacts
/// to. Hooks are only invoked on nodes that are enabled and visible.
pub trait Focusable {
    fn view(&self) -> WidgetView;

    /// Cursor arrived on this node
    fn on_select(&mut self) {}

    /// Cursor left this node
    fn on_deselect(&mut self) {}

    /// Confirm press edge while focused
    fn on_button_down(&mut self) {}

    /// Every tick Confirm is held while focused
    fn while_button_down(&mut self) {}

    /// Every tick the node is focused and Confirm is not held
    fn while_hover(&mut self) {}

    /// Confirm release edge while focused
    fn on_button_released(&mut self) {}

    /// Deferred activation after the content click window
    fn on_click(&mut self) {}

    fn on_value_changed(&mut self) {}

    /// Directional scroll; `thumbstick` is true when it came from the right stick
    fn on_scroll(&mut self, _direction: Direction, _thumbstick: bool) -> Capture {
        Capture::Ignored
    }

    fn on_layout_changed(&mut self, _layout: GridLayout) {}

    fn on_visibility_changed(&mut self, _visible: bool) {}

    /// Offered every directional press while focused, before content cycling.
    fn capture_direction(&mut self, _direction: Direction) -> Capture {
        Capture::Ignored
    }

    /// Whether bulk enable/disable of a grid's content recolors this node
    fn tint_on_bulk_update(&self) -> bool {
        true
    }

    /// Mutually exclusive group name; activating one member clears the rest
    fn exclusive_group(&self) -> Option<&str> {
        None
    }

    /// Another member of this node's exclusive group was activated
    fn clear_exclusive(&mut self) {}
}
