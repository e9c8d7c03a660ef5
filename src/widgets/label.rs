use crate::nav::focusable::{Focusable, WidgetView};

/// Static text. Added with `HierarchyTag::None`, so it is never focused.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Focusable for Label {
    fn view(&self) -> WidgetView {
        WidgetView::Label(self.text.clone())
    }
}
