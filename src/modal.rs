// Confirmation overlay driven by Left/Right and Confirm/Cancel

use crate::input::{Button, Direction, PadInput};
use crate::nav::pure::cycle_index;
use crate::nav::timer::{Clock, Deadline};
use crate::nav::types::NavEvent;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// One choice of a modal, with the callback run when it is confirmed.
pub struct ModalOption {
    label: String,
    on_confirm: Option<Box<dyn FnMut()>>,
}

impl ModalOption {
    pub fn new(label: impl Into<String>, on_confirm: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            on_confirm: Some(Box::new(on_confirm)),
        }
    }

    /// An option that only closes the overlay.
    pub fn close(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_confirm: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for ModalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalOption")
            .field("label", &self.label)
            .field("has_callback", &self.on_confirm.is_some())
            .finish()
    }
}

/// Modal picker over a row of options.
///
/// While active it shadows the screen underneath. Left/Right move the
/// highlight at any time; Confirm and Cancel are ignored until the debounce
/// window after `show` has passed, so the press that opened the overlay
/// cannot also answer it.
#[derive(Debug)]
pub struct ModalOverlay {
    header: String,
    message: String,
    options: Vec<ModalOption>,
    index: usize,
    ready: Option<Deadline>,
    timeout: Duration,
}

impl ModalOverlay {
    pub fn new(timeout: Duration) -> Self {
        Self {
            header: String::new(),
            message: String::new(),
            options: Vec::new(),
            index: 0,
            ready: None,
            timeout,
        }
    }

    pub fn show(
        &mut self,
        header: impl Into<String>,
        message: impl Into<String>,
        options: Vec<ModalOption>,
        clock: &Clock,
    ) {
        if options.is_empty() {
            warn!("modal shown without options, ignoring");
            return;
        }
        self.header = header.into();
        self.message = message.into();
        self.options = options;
        self.index = 0;
        self.ready = Some(Deadline::after(clock, self.timeout));
        debug!(header = %self.header, options = self.options.len(), "modal shown");
    }

    pub fn is_active(&self) -> bool {
        self.ready.is_some()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(ModalOption::label)
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.is_active().then_some(self.index)
    }

    /// Whether Confirm/Cancel are accepted yet.
    pub fn accepts_answer(&self, clock: &Clock) -> bool {
        self.ready.is_some_and(|d| d.is_due(clock))
    }

    pub fn next_option(&mut self) {
        self.index = cycle_index(self.index, self.options.len(), Direction::Right);
    }

    pub fn previous_option(&mut self) {
        self.index = cycle_index(self.index, self.options.len(), Direction::Left);
    }

    pub fn update(&mut self, input: &PadInput, clock: &Clock, events: &mut Vec<NavEvent>) {
        if !self.is_active() {
            return;
        }
        match input.direction_pressed() {
            Some(Direction::Right) => self.next_option(),
            Some(Direction::Left) => self.previous_option(),
            _ => {}
        }

        if !self.accepts_answer(clock) {
            return;
        }
        if input.clicked(Button::Confirm) {
            self.confirm(events);
        } else if input.pressed(Button::Cancel) {
            self.dismiss(events);
        }
    }

    fn confirm(&mut self, events: &mut Vec<NavEvent>) {
        let index = self.index;
        let mut options = std::mem::take(&mut self.options);
        self.clear();
        if let Some(option) = options.get_mut(index) {
            debug!(index, label = %option.label, "modal confirmed");
            if let Some(callback) = option.on_confirm.as_mut() {
                callback();
            }
            events.push(NavEvent::ModalConfirmed {
                index,
                label: option.label.clone(),
            });
        }
    }

    /// Close without running any callback.
    pub fn dismiss(&mut self, events: &mut Vec<NavEvent>) {
        if self.is_active() {
            self.clear();
            debug!("modal dismissed");
            events.push(NavEvent::ModalDismissed);
        }
    }

    fn clear(&mut self) {
        self.header.clear();
        self.message.clear();
        self.options.clear();
        self.index = 0;
        self.ready = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawPadState;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Rig {
        input: PadInput,
        clock: Clock,
        events: Vec<NavEvent>,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                input: PadInput::default(),
                clock: Clock::new(),
                events: Vec::new(),
            }
        }

        fn tick(&mut self, modal: &mut ModalOverlay, buttons: &[Button], ms: u64) {
            self.clock.advance(Duration::from_millis(ms));
            self.input.update(&RawPadState {
                buttons: buttons.iter().copied().collect(),
                ..Default::default()
            });
            modal.update(&self.input, &self.clock, &mut self.events);
        }
    }

    #[test]
    fn test_left_right_wrap() {
        let mut rig = Rig::new();
        let mut modal = ModalOverlay::new(Duration::from_millis(500));
        modal.show(
            "Pick",
            "",
            vec![ModalOption::close("a"), ModalOption::close("b")],
            &rig.clock,
        );
        rig.tick(&mut modal, &[Button::Left], 16);
        assert_eq!(modal.highlighted(), Some(1));
        rig.tick(&mut modal, &[], 16);
        rig.tick(&mut modal, &[Button::Right], 16);
        assert_eq!(modal.highlighted(), Some(0));
    }

    #[test]
    fn test_cancel_dismisses_after_window() {
        let mut rig = Rig::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut modal = ModalOverlay::new(Duration::from_millis(500));
        modal.show(
            "Quit?",
            "",
            vec![ModalOption::new("Yes", move || h.set(h.get() + 1))],
            &rig.clock,
        );

        rig.tick(&mut modal, &[Button::Cancel], 100);
        assert!(modal.is_active());
        rig.tick(&mut modal, &[], 500);
        rig.tick(&mut modal, &[Button::Cancel], 16);
        assert!(!modal.is_active());
        assert_eq!(hits.get(), 0);
        assert_eq!(rig.events, vec![NavEvent::ModalDismissed]);
    }

    #[test]
    fn test_show_without_options_stays_inactive() {
        let clock = Clock::new();
        let mut modal = ModalOverlay::new(Duration::from_millis(500));
        modal.show("Empty", "", Vec::new(), &clock);
        assert!(!modal.is_active());
        assert_eq!(modal.highlighted(), None);
    }
}
