use crate::nav::focusable::{Focusable, WidgetView};
use std::fmt;

pub struct CheckBox {
    label: String,
    checked: bool,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl CheckBox {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            on_change: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn checked(&self) -> bool {
        self.checked
    }
}

impl fmt::Debug for CheckBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckBox")
            .field("label", &self.label)
            .field("checked", &self.checked)
            .finish()
    }
}

impl Focusable for CheckBox {
    fn view(&self) -> WidgetView {
        WidgetView::CheckBox {
            label: self.label.clone(),
            checked: self.checked,
        }
    }

    fn on_click(&mut self) {
        self.checked = !self.checked;
        if let Some(f) = self.on_change.as_mut() {
            f(self.checked);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_click_toggles_and_reports() {
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        let mut cb = CheckBox::new("Vsync", false).on_change(move |v| s.set(Some(v)));
        cb.on_click();
        assert!(cb.checked());
        assert_eq!(seen.get(), Some(true));
        cb.on_click();
        assert!(!cb.checked());
        assert_eq!(seen.get(), Some(false));
    }
}
