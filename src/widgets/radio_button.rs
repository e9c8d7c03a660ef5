use crate::nav::focusable::{Focusable, WidgetView};

/// Radio button; siblings sharing a group name are cleared when one is clicked.
#[derive(Debug, Clone)]
pub struct RadioButton {
    label: String,
    group: String,
    checked: bool,
}

impl RadioButton {
    pub fn new(label: impl Into<String>, group: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            group: group.into(),
            checked,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }
}

impl Focusable for RadioButton {
    fn view(&self) -> WidgetView {
        WidgetView::RadioButton {
            label: self.label.clone(),
            checked: self.checked,
        }
    }

    fn on_click(&mut self) {
        self.checked = true;
    }

    fn exclusive_group(&self) -> Option<&str> {
        Some(&self.group)
    }

    fn clear_exclusive(&mut self) {
        self.checked = false;
    }
}
