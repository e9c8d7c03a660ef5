// Per-tick pipeline: revalidate -> buttons -> directions -> content hooks -> deferred click

use crate::input::{Button, PadInput};
use crate::nav::focusable::Capture;
use crate::nav::grid::PanelGrid;
use crate::nav::timer::Clock;
use crate::nav::tree::NavTree;
use crate::nav::types::{NodeId, SelectionMode};
use tracing::warn;

/// What one tick of navigation reads: the refreshed input and the clock.
pub struct NavContext<'a> {
    pub input: &'a PadInput,
    pub clock: &'a Clock,
}

impl NavTree {
    /// Run one tick on the grids that held the lock when the tick began.
    ///
    /// A grid that receives the lock during this tick does not see this
    /// tick's input.
    pub fn update(&mut self, ctx: &NavContext<'_>) {
        let unlocked = self.unlocked_grids();
        if unlocked.len() > 1 {
            warn!(?unlocked, "more than one grid holds the lock");
        }

        for id in unlocked {
            if !self.is_path_reachable(id) {
                if id != self.root {
                    warn!(grid = %id, "lock holder became unreachable, handing lock outward");
                    self.with_grid(id, |tree, grid| tree.ascend(id, grid));
                }
                continue;
            }
            self.with_grid(id, |tree, grid| tree.step_grid(id, grid, ctx));
        }

        self.cycle_tabs(ctx.input);
    }

    fn step_grid(&mut self, id: NodeId, grid: &mut PanelGrid, ctx: &NavContext<'_>) {
        let input = ctx.input;
        self.revalidate(id, grid);

        if input.pressed(Button::Confirm) {
            match grid.mode {
                SelectionMode::PanelRoot => self.panel_mode_in(id, grid),
                SelectionMode::Panel => self.confirm_panel(id, grid),
                SelectionMode::PanelContent => self.click_panel_content(id, grid, ctx.clock),
            }
        } else if input.pressed(Button::Cancel) {
            match grid.mode {
                SelectionMode::PanelContent => self.panel_mode_out(id, grid),
                SelectionMode::Panel if self.parent_grid(id).is_some() => self.ascend(id, grid),
                SelectionMode::Panel => self.select_root(id, grid),
                SelectionMode::PanelRoot => {}
            }
        }

        // lock handed off this tick
        if grid.locked {
            return;
        }

        if let Some(direction) = input.direction_pressed() {
            match grid.mode {
                SelectionMode::Panel => self.move_panel(id, grid, direction),
                SelectionMode::PanelContent => self.move_content(id, grid, direction),
                SelectionMode::PanelRoot => {}
            }
        }

        if input.pressed(Button::Reset) && grid.mode == SelectionMode::Panel {
            self.reset_cursor(id, grid);
        }

        if grid.mode == SelectionMode::PanelContent {
            self.forward_content_input(grid, input);
            self.fire_pending_click(id, grid, ctx.clock);
        }
    }

    fn forward_content_input(&mut self, grid: &PanelGrid, input: &PadInput) {
        let Some(node) = grid.focused_content() else {
            return;
        };
        self.with_widget(node, |w| {
            if input.down(Button::Confirm) {
                w.while_button_down();
            } else {
                w.while_hover();
            }
            if input.pressed(Button::Confirm) {
                w.on_button_down();
            } else if input.released(Button::Confirm) {
                w.on_button_released();
            }
        });

        if let Some(direction) = input.scroll_pressed() {
            let capture = self.with_widget(node, |w| w.on_scroll(direction, true));
            if capture == Some(Capture::ValueChanged) {
                self.value_changed(node);
            }
        }
    }
}
