use crate::nav::focusable::{Capture, Focusable, WidgetView};
use crate::nav::types::Direction;
use crate::widgets::select_list::SelectList;

/// Collapsed list that opens on click. While open it takes Up/Down for its
/// item cursor and swallows Left/Right.
#[derive(Debug)]
pub struct DropDown {
    list: SelectList,
    open: bool,
}

impl DropDown {
    pub fn new(list: SelectList) -> Self {
        Self { list, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn list(&self) -> &SelectList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SelectList {
        &mut self.list
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl Focusable for DropDown {
    fn view(&self) -> WidgetView {
        WidgetView::DropDown {
            items: self.list.items().to_vec(),
            selected: self.list.selected(),
            open: self.open,
        }
    }

    fn on_click(&mut self) {
        self.open = !self.open;
        if self.open && self.list.selected().is_none() && self.list.select_next() {
            self.list.on_value_changed();
        }
    }

    fn on_deselect(&mut self) {
        self.close();
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        if !visible {
            self.close();
        }
    }

    fn capture_direction(&mut self, direction: Direction) -> Capture {
        if !self.open {
            return Capture::Ignored;
        }
        match direction {
            Direction::Up | Direction::Down => match self.list.capture_direction(direction) {
                Capture::Ignored => Capture::Consumed,
                other => other,
            },
            Direction::Left | Direction::Right => Capture::Consumed,
        }
    }

    fn on_value_changed(&mut self) {
        self.list.on_value_changed();
    }

    fn tint_on_bulk_update(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_dropdown_lets_directions_through() {
        let mut dd = DropDown::new(SelectList::new(["Mage", "Monk", "Rogue"]));
        assert_eq!(dd.capture_direction(Direction::Down), Capture::Ignored);
    }

    #[test]
    fn test_open_selects_first_and_cycles() {
        let mut dd = DropDown::new(SelectList::new(["Mage", "Monk", "Rogue"]));
        dd.on_click();
        assert!(dd.is_open());
        assert_eq!(dd.selected(), Some(0));
        assert_eq!(dd.capture_direction(Direction::Down), Capture::ValueChanged);
        assert_eq!(dd.capture_direction(Direction::Down), Capture::ValueChanged);
        assert_eq!(dd.selected(), Some(2));
        dd.capture_direction(Direction::Down);
        assert_eq!(dd.selected(), Some(0));
        assert_eq!(dd.capture_direction(Direction::Right), Capture::Consumed);
    }

    #[test]
    fn test_losing_focus_closes_but_keeps_choice() {
        let mut dd = DropDown::new(SelectList::new(["a", "b"]));
        dd.on_click();
        dd.capture_direction(Direction::Down);
        dd.on_deselect();
        assert!(!dd.is_open());
        assert_eq!(dd.selected(), Some(1));
    }
}
