use crate::nav::focusable::{Focusable, WidgetView};
use std::fmt;

pub struct Button {
    label: String,
    on_click: Option<Box<dyn FnMut()>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
        }
    }

    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish()
    }
}

impl Focusable for Button {
    fn view(&self) -> WidgetView {
        WidgetView::Button {
            label: self.label.clone(),
        }
    }

    fn on_click(&mut self) {
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
    }
}
