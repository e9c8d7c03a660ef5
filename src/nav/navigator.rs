use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::input::{PadInput, PadSource, RawPadState};
use crate::modal::{ModalOption, ModalOverlay};
use crate::nav::pipelines::NavContext;
use crate::nav::timer::Clock;
use crate::nav::tree::NavTree;
use crate::nav::types::NavEvent;
use std::time::Duration;
use tracing::{debug, info};

/// Handle to a screen registered with a `Navigator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(usize);

impl ScreenId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the input adapter, the clock, the modal and every screen, and
/// routes each tick to the one screen that currently owns the pad.
pub struct Navigator {
    config: NavConfig,
    input: PadInput,
    clock: Clock,
    screens: Vec<NavTree>,
    active: Option<ScreenId>,
    modal: ModalOverlay,
}

impl Navigator {
    pub fn new(config: NavConfig) -> Self {
        Self {
            input: PadInput::new(&config),
            clock: Clock::new(),
            screens: Vec::new(),
            active: None,
            modal: ModalOverlay::new(config.message_box_timeout()),
            config,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn input(&self) -> &PadInput {
        &self.input
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn add_screen(&mut self, tree: NavTree) -> ScreenId {
        self.screens.push(tree);
        ScreenId(self.screens.len() - 1)
    }

    pub fn screen(&self, id: ScreenId) -> Result<&NavTree> {
        self.screens.get(id.0).ok_or(NavError::UnknownScreen(id.0))
    }

    pub fn screen_mut(&mut self, id: ScreenId) -> Result<&mut NavTree> {
        self.screens
            .get_mut(id.0)
            .ok_or(NavError::UnknownScreen(id.0))
    }

    pub fn active_screen(&self) -> Option<ScreenId> {
        self.active
    }

    pub fn active_tree(&self) -> Option<&NavTree> {
        self.active.and_then(|id| self.screens.get(id.0))
    }

    /// Make `screen` the one that owns the pad. The previously active
    /// screen is fully locked.
    pub fn start_panel_selection(&mut self, screen: ScreenId) -> Result<()> {
        let root = self.screen(screen)?.root();
        if let Some(previous) = self.active.filter(|p| *p != screen) {
            self.screens[previous.0].lock_all();
        }
        self.screens[screen.0].start_panel_selection(root)?;
        self.active = Some(screen);
        // a button held across the swap must not click the new screen
        self.input.rearm();
        info!(screen = screen.0, "screen activated");
        Ok(())
    }

    /// Open the confirmation overlay. It owns the pad until confirmed or
    /// dismissed.
    pub fn show_modal(
        &mut self,
        header: impl Into<String>,
        message: impl Into<String>,
        options: Vec<ModalOption>,
    ) {
        self.modal.show(header, message, options, &self.clock);
        self.input.rearm();
    }

    pub fn modal(&self) -> &ModalOverlay {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalOverlay {
        &mut self.modal
    }

    /// Poll `source` and run one tick.
    pub fn update(&mut self, source: &mut dyn PadSource, delta: Duration) -> Vec<NavEvent> {
        let raw = source.poll();
        self.update_with(raw, delta)
    }

    /// One tick: clock, input refresh, active screen, then the modal so it
    /// sees everything the screen did this tick.
    pub fn update_with(&mut self, raw: RawPadState, delta: Duration) -> Vec<NavEvent> {
        self.clock.advance(delta);
        self.input.update(&raw);

        let mut events = Vec::new();
        let modal_open = self.modal.is_active();
        if let Some(tree) = self.active.and_then(|id| self.screens.get_mut(id.0)) {
            if !modal_open {
                let ctx = NavContext {
                    input: &self.input,
                    clock: &self.clock,
                };
                tree.update(&ctx);
            }
            events.extend(tree.drain_events());
        }

        self.modal.update(&self.input, &self.clock, &mut events);
        if !events.is_empty() {
            debug!(tick = self.clock.tick(), count = events.len(), "navigation events");
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::types::{GridLayout, SelectionDimension, SelectionMode};

    fn screen(cfg: &NavConfig) -> NavTree {
        NavTree::new(cfg, GridLayout::Default, SelectionDimension::Flat)
    }

    #[test]
    fn test_hot_swap_locks_previous_screen() {
        let cfg = NavConfig::default();
        let mut nav = Navigator::new(cfg.clone());
        let a = nav.add_screen(screen(&cfg));
        let b = nav.add_screen(screen(&cfg));

        nav.start_panel_selection(a).unwrap();
        assert_eq!(nav.active_screen(), Some(a));
        assert_eq!(nav.screen(a).unwrap().unlocked_grids().len(), 1);

        nav.start_panel_selection(b).unwrap();
        assert_eq!(nav.active_screen(), Some(b));
        assert!(nav.screen(a).unwrap().unlocked_grids().is_empty());
        let root_b = nav.screen(b).unwrap().root_grid().unwrap();
        assert!(!root_b.is_locked());
        assert_eq!(root_b.mode(), SelectionMode::Panel);
    }

    #[test]
    fn test_unknown_screen() {
        let nav = Navigator::new(NavConfig::default());
        assert!(matches!(
            nav.screen(ScreenId(3)),
            Err(NavError::UnknownScreen(3))
        ));
    }

    #[test]
    fn test_tick_without_screens_is_harmless() {
        let mut nav = Navigator::new(NavConfig::default());
        let events = nav.update_with(RawPadState::default(), Duration::from_millis(16));
        assert!(events.is_empty());
        assert_eq!(nav.clock().tick(), 1);
    }
}
