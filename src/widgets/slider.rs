use crate::nav::focusable::{Capture, Focusable, WidgetView};
use crate::nav::types::Direction;
use std::fmt;

/// Integer slider stepped by horizontal scroll input.
pub struct Slider {
    label: String,
    value: i32,
    min: i32,
    max: i32,
    step: i32,
    on_change: Option<Box<dyn FnMut(i32)>>,
}

impl Slider {
    pub fn new(label: impl Into<String>, min: i32, max: i32, value: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            label: label.into(),
            value: value.clamp(min, max),
            min,
            max,
            step: 1,
            on_change: None,
        }
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(i32) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Move by `steps` increments, clamped. Returns whether the value moved.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let next = self
            .value
            .saturating_add(steps.saturating_mul(self.step))
            .clamp(self.min, self.max);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl Focusable for Slider {
    fn view(&self) -> WidgetView {
        WidgetView::Slider {
            label: self.label.clone(),
            value: self.value,
            min: self.min,
            max: self.max,
        }
    }

    fn on_scroll(&mut self, direction: Direction, _thumbstick: bool) -> Capture {
        let steps = match direction {
            Direction::Right => 1,
            Direction::Left => -1,
            _ => return Capture::Ignored,
        };
        if self.nudge(steps) {
            Capture::ValueChanged
        } else {
            Capture::Consumed
        }
    }

    fn on_value_changed(&mut self) {
        if let Some(f) = self.on_change.as_mut() {
            f(self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_scroll_steps_and_clamps() {
        let mut slider = Slider::new("Volume", 0, 10, 9).with_step(2);
        assert_eq!(slider.on_scroll(Direction::Right, true), Capture::ValueChanged);
        assert_eq!(slider.value(), 10);
        assert_eq!(slider.on_scroll(Direction::Right, true), Capture::Consumed);
        assert_eq!(slider.on_scroll(Direction::Left, true), Capture::ValueChanged);
        assert_eq!(slider.value(), 8);
        assert_eq!(slider.on_scroll(Direction::Up, true), Capture::Ignored);
    }

    #[test]
    fn test_huge_steps_saturate_at_bounds() {
        let mut slider = Slider::new("v", 0, i32::MAX, 10).with_step(i32::MAX);
        assert_eq!(slider.on_scroll(Direction::Right, false), Capture::ValueChanged);
        assert_eq!(slider.value(), i32::MAX);
        assert_eq!(slider.on_scroll(Direction::Right, false), Capture::Consumed);

        let mut slider = Slider::new("v", i32::MIN, 0, -10).with_step(i32::MAX);
        assert!(slider.nudge(-2));
        assert_eq!(slider.value(), i32::MIN);
    }

    #[test]
    fn test_swapped_bounds() {
        let slider = Slider::new("x", 5, -5, 100);
        assert_eq!(slider.value(), 5);
    }
}
