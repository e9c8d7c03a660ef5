use crate::nav::focusable::{Capture, Focusable, WidgetView};
use crate::nav::types::Direction;
use std::collections::BTreeSet;
use std::fmt;

/// Scrolling list with its own item cursor.
///
/// Up/Down move the item cursor instead of the grid's content cursor and
/// wrap at both ends, skipping locked entries and entries hidden by the
/// filter. Left/Right fall through to the grid.
pub struct SelectList {
    items: Vec<String>,
    locked: BTreeSet<usize>,
    filter: Option<String>,
    selected: Option<usize>,
    first_visible: usize,
    visible_rows: usize,
    on_change: Option<Box<dyn FnMut(Option<usize>)>>,
}

impl SelectList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            locked: BTreeSet::new(),
            filter: None,
            selected: None,
            first_visible: 0,
            visible_rows: 8,
            on_change: None,
        }
    }

    pub fn with_locked(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.locked.extend(indices);
        self
    }

    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(Option<usize>) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn set_locked(&mut self, index: usize, locked: bool) {
        if locked {
            self.locked.insert(index);
            if self.selected == Some(index) {
                self.selected = None;
            }
        } else {
            self.locked.remove(&index);
        }
    }

    /// Restrict the cursor to items containing `filter` (case-insensitive).
    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.filter = filter.filter(|f| !f.is_empty()).map(str::to_lowercase);
        if self.selected.is_some_and(|i| !self.is_selectable(i)) {
            self.selected = None;
        }
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        if index >= self.items.len() || self.locked.contains(&index) {
            return false;
        }
        match &self.filter {
            Some(f) => self.items[index].to_lowercase().contains(f.as_str()),
            None => true,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn select_next(&mut self) -> bool {
        self.step(true)
    }

    pub fn select_previous(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> bool {
        let len = self.items.len();
        let next = (0..len)
            .map(|k| match self.selected {
                Some(i) if forward => (i + 1 + k) % len,
                Some(i) => (i + len - 1 - k) % len,
                None if forward => k,
                None => len - 1 - k,
            })
            .find(|i| self.is_selectable(*i));

        match next {
            Some(i) if Some(i) != self.selected => {
                self.selected = Some(i);
                self.scroll_into_view(i);
                true
            }
            _ => false,
        }
    }

    fn scroll_into_view(&mut self, index: usize) {
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + self.visible_rows {
            self.first_visible = index + 1 - self.visible_rows;
        }
    }

    fn max_first_visible(&self) -> usize {
        self.items.len().saturating_sub(self.visible_rows)
    }
}

impl fmt::Debug for SelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectList")
            .field("items", &self.items)
            .field("locked", &self.locked)
            .field("selected", &self.selected)
            .finish()
    }
}

impl Focusable for SelectList {
    fn view(&self) -> WidgetView {
        WidgetView::List {
            items: self.items.clone(),
            locked: self.locked.iter().copied().collect(),
            selected: self.selected,
            first_visible: self.first_visible,
            visible_rows: self.visible_rows,
        }
    }

    fn on_select(&mut self) {
        if self.selected.is_none() && self.select_next() {
            self.on_value_changed();
        }
    }

    fn on_deselect(&mut self) {
        self.clear_selection();
    }

    fn capture_direction(&mut self, direction: Direction) -> Capture {
        let moved = match direction {
            Direction::Up => self.select_previous(),
            Direction::Down => self.select_next(),
            Direction::Left | Direction::Right => return Capture::Ignored,
        };
        if moved {
            Capture::ValueChanged
        } else {
            Capture::Consumed
        }
    }

    fn on_scroll(&mut self, direction: Direction, _thumbstick: bool) -> Capture {
        match direction {
            Direction::Up => self.first_visible = self.first_visible.saturating_sub(1),
            Direction::Down => {
                self.first_visible = (self.first_visible + 1).min(self.max_first_visible())
            }
            _ => return Capture::Ignored,
        }
        Capture::Consumed
    }

    fn on_value_changed(&mut self) {
        let selected = self.selected;
        if let Some(f) = self.on_change.as_mut() {
            f(selected);
        }
    }

    fn tint_on_bulk_update(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_skips_locked_and_wraps() {
        let mut list = SelectList::new(["Header", "a", "b", "c"]).with_locked([0]);
        assert!(list.select_next());
        assert_eq!(list.selected(), Some(1));
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(3));
        list.select_next();
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_previous_from_nothing_takes_last() {
        let mut list = SelectList::new(["a", "b", "c"]).with_locked([2]);
        list.select_previous();
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_all_locked_is_a_no_op() {
        let mut list = SelectList::new(["a", "b"]).with_locked([0, 1]);
        assert!(!list.select_next());
        assert_eq!(list.selected(), None);
        assert_eq!(list.capture_direction(Direction::Down), Capture::Consumed);
    }

    #[test]
    fn test_filter_limits_cursor() {
        let mut list = SelectList::new(["Mage", "Monk", "Rogue"]);
        list.select_next();
        list.set_filter(Some("ro"));
        assert_eq!(list.selected(), None);
        list.select_next();
        assert_eq!(list.selected_item(), Some("Rogue"));
        assert!(!list.select_next());
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut list = SelectList::new(["0", "1", "2", "3", "4"]).with_visible_rows(2);
        for _ in 0..4 {
            list.select_next();
        }
        assert_eq!(list.selected(), Some(3));
        assert_eq!(list.first_visible(), 2);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.first_visible(), 0);
    }

    #[test]
    fn test_focus_selects_first_and_blur_clears() {
        let mut list = SelectList::new(["a", "b"]);
        list.on_select();
        assert_eq!(list.selected(), Some(0));
        list.on_deselect();
        assert_eq!(list.selected(), None);
        assert_eq!(list.capture_direction(Direction::Left), Capture::Ignored);
    }
}
