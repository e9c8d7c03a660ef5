// Selection state machine transitions of a single grid

use crate::error::{NavError, Result};
use crate::nav::focusable::Capture;
use crate::nav::grid::{PanelGrid, PendingClick};
use crate::nav::node::Node;
use crate::nav::pure::{cycle_index, find_panel_index};
use crate::nav::timer::{Clock, Deadline};
use crate::nav::tree::NavTree;
use crate::nav::types::{
    Direction, HierarchyTag, Highlight, NavEvent, NodeId, SelectionMode, SelectionState,
};
use tracing::{debug, info, warn};

impl NavTree {
    fn set_mode(&mut self, grid_id: NodeId, grid: &mut PanelGrid, mode: SelectionMode) {
        if grid.mode != mode {
            debug!(grid = %grid_id, from = ?grid.mode, to = ?mode, "mode change");
            grid.mode = mode;
            self.events.push(NavEvent::ModeChanged { grid: grid_id, mode });
        }
    }

    /// Activate a root grid: every grid is locked and returned to its outer
    /// state, then the root takes the lock in panel mode.
    pub fn start_panel_selection(&mut self, grid: NodeId) -> Result<()> {
        let is_root = self.node(grid)?.tag == HierarchyTag::RootGrid
            && self.grids.get(&grid).is_some_and(PanelGrid::is_root);
        if !is_root {
            return Err(NavError::NotRootGrid(grid));
        }

        self.lock_all();
        let mut ids: Vec<NodeId> = self.grids.keys().copied().collect();
        ids.sort();
        for id in ids {
            self.with_grid(id, |tree, state| tree.collapse(id, state));
        }
        self.selected_content = None;

        self.with_grid(grid, |tree, state| {
            state.locked = false;
            tree.panel_mode_in(grid, state);
        });
        info!(grid = %grid, "panel selection started");
        Ok(())
    }

    /// Put a grid's cursor back on its default panel.
    pub fn reset_panel_selection(&mut self, grid: NodeId) -> Result<()> {
        self.with_grid(grid, |tree, state| {
            if state.mode == SelectionMode::PanelContent {
                tree.leave_content(grid, state);
                tree.set_mode(grid, state, SelectionMode::Panel);
            }
            tree.reset_cursor(grid, state);
        })
        .ok_or(NavError::NotAGrid(grid))?;
        info!(grid = %grid, "panel selection reset");
        Ok(())
    }

    pub(crate) fn reset_cursor(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        grid.panel_index = grid.default_panel_index;
        self.select_panel_at_cursor(grid_id, grid);
    }

    /// PanelRoot -> Panel
    pub(crate) fn panel_mode_in(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        self.paint_grid_focus(grid_id, grid, true);
        self.set_mode(grid_id, grid, SelectionMode::Panel);
        self.reset_cursor(grid_id, grid);
    }

    /// Return a grid to PanelRoot without touching its lock.
    pub(crate) fn collapse(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        if grid.mode == SelectionMode::PanelContent {
            self.leave_content(grid_id, grid);
        }
        grid.selected_panel = None;
        self.paint_panels(grid_id, grid);
        self.paint_grid_focus(grid_id, grid, false);
        self.set_mode(grid_id, grid, SelectionMode::PanelRoot);
    }

    /// Cancel in Panel mode on a grid with no outer grid to return to.
    pub(crate) fn select_root(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        self.collapse(grid_id, grid);
    }

    /// Hand the lock back to the nearest outer grid.
    pub(crate) fn ascend(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        let Some(parent) = self.parent_grid(grid_id) else {
            warn!(grid = %grid_id, "no outer grid to return to");
            self.collapse(grid_id, grid);
            return;
        };
        self.collapse(grid_id, grid);

        // unlock the next owner before locking this one
        if let Some(outer) = self.grids.get_mut(&parent) {
            outer.locked = false;
        }
        grid.locked = true;
        self.selected_content = None;
        self.with_grid(parent, |tree, outer| tree.paint_panels(parent, outer));
        debug!(from = %grid_id, to = %parent, "ascended");
        self.events.push(NavEvent::Ascended {
            from: grid_id,
            to: parent,
        });
    }

    /// Move the lock into the first reachable grid inside the selected panel.
    pub(crate) fn descend(&mut self, grid_id: NodeId, grid: &mut PanelGrid) -> bool {
        let Some(panel) = grid.selected_panel.filter(|p| *p != grid_id) else {
            return false;
        };
        let Some(target) = self
            .find_reachable_tagged(panel, HierarchyTag::PanelGrid)
            .filter(|t| self.grids.contains_key(t))
        else {
            return false;
        };

        if let Some(inner) = self.grids.get_mut(&target) {
            inner.locked = false;
        }
        grid.locked = true;
        self.selected_content = None;
        debug!(from = %grid_id, to = %target, "descended");
        self.events.push(NavEvent::Descended {
            from: grid_id,
            to: target,
        });
        self.with_grid(target, |tree, inner| tree.panel_mode_in(target, inner));
        true
    }

    /// Confirm while in Panel mode.
    pub(crate) fn confirm_panel(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        let deep = grid.dimension() == Some(crate::nav::types::SelectionDimension::Deep);
        if deep && self.descend(grid_id, grid) {
            return;
        }
        if self.panel_content_mode(grid_id, grid) {
            return;
        }
        // nested grids fall through to a grid inside a content-less panel
        if !grid.is_root() {
            self.descend(grid_id, grid);
        }
    }

    /// Point the grid at the panel under its cursor, skipping panels that
    /// can no longer take focus. A grid without panels selects itself and
    /// enters its content directly.
    pub(crate) fn select_panel_at_cursor(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        let panels = self.panels(grid_id);
        if panels.is_empty() {
            grid.selected_panel = Some(grid_id);
            self.panel_content_mode(grid_id, grid);
            return;
        }

        if grid.panel_index >= panels.len() {
            warn!(grid = %grid_id, index = grid.panel_index, "panel index out of range, clamping");
            grid.panel_index = 0;
        }
        if !self.is_navigable_panel(panels[grid.panel_index]) {
            let fallback = std::iter::once(grid.default_panel_index)
                .chain(0..panels.len())
                .find(|i| panels.get(*i).is_some_and(|p| self.is_navigable_panel(*p)));
            match fallback {
                Some(i) => grid.panel_index = i,
                None => {
                    debug!(grid = %grid_id, "no navigable panel");
                    grid.selected_panel = None;
                    self.paint_panels(grid_id, grid);
                    return;
                }
            }
        }

        let panel = panels[grid.panel_index];
        grid.selected_panel = Some(panel);
        self.update_scroll(grid_id, grid);
        self.paint_panels(grid_id, grid);
        self.events.push(NavEvent::PanelSelected {
            grid: grid_id,
            panel,
            index: grid.panel_index,
        });
    }

    pub(crate) fn move_panel(&mut self, grid_id: NodeId, grid: &mut PanelGrid, direction: Direction) {
        let panels = self.panels(grid_id);
        if panels.is_empty() {
            return;
        }
        let next = find_panel_index(grid.panel_index, panels.len(), direction, |i| {
            self.is_navigable_panel(panels[i])
        });
        if let Some(next) = next {
            grid.panel_index = next;
            self.select_panel_at_cursor(grid_id, grid);
        }
    }

    /// Panel -> PanelContent, if the selected panel has selectable content.
    pub(crate) fn panel_content_mode(&mut self, grid_id: NodeId, grid: &mut PanelGrid) -> bool {
        let Some(panel) = grid.selected_panel else {
            return false;
        };
        let selectable = self.selectable_children(panel);
        if selectable.is_empty() {
            return false;
        }

        grid.selectable = selectable;
        grid.content_index = 0;
        grid.pending_click = None;
        self.selected_content = None;
        self.set_content_state(grid_id, SelectionState::Disabled);
        self.set_mode(grid_id, grid, SelectionMode::PanelContent);
        self.select_current_child(grid_id, grid, true);
        true
    }

    /// PanelContent -> Panel. Grids without panels have nothing to go back
    /// to and hand the lock outward instead.
    pub(crate) fn panel_mode_out(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        if grid.selected_panel == Some(grid_id) {
            self.ascend(grid_id, grid);
            return;
        }
        self.leave_content(grid_id, grid);
        self.set_mode(grid_id, grid, SelectionMode::Panel);
        self.select_panel_at_cursor(grid_id, grid);
    }

    pub(crate) fn leave_content(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        if let Some(current) = grid.focused_content() {
            self.with_widget(current, |w| w.on_deselect());
        }
        if grid.pending_click.take().is_some() {
            debug!(grid = %grid_id, "dropped pending click");
        }
        self.clicked_content = None;
        self.selected_content = None;
        grid.selectable.clear();
        grid.content_index = 0;
        self.set_content_state(grid_id, SelectionState::Enabled);
    }

    pub(crate) fn move_content(&mut self, grid_id: NodeId, grid: &mut PanelGrid, direction: Direction) {
        let Some(current) = grid.focused_content() else {
            return;
        };
        let capture = self
            .with_widget(current, |w| w.capture_direction(direction))
            .unwrap_or(Capture::Ignored);
        match capture {
            Capture::ValueChanged => {
                self.value_changed(current);
                return;
            }
            Capture::Consumed => return,
            Capture::Ignored => {}
        }

        grid.content_index = cycle_index(grid.content_index, grid.selectable.len(), direction);
        self.select_current_child(grid_id, grid, true);
    }

    pub(crate) fn value_changed(&mut self, id: NodeId) {
        self.with_widget(id, |w| w.on_value_changed());
        self.events.push(NavEvent::ValueChanged { node: id });
    }

    /// Highlight the content under the cursor; with `raise_events` also run
    /// the deselect/select hooks when the focused node changes.
    pub(crate) fn select_current_child(&mut self, grid_id: NodeId, grid: &mut PanelGrid, raise_events: bool) {
        if grid.selectable.is_empty() {
            return;
        }
        if grid.content_index >= grid.selectable.len() {
            warn!(grid = %grid_id, index = grid.content_index, "stale content index, clamping to 0");
            grid.content_index = 0;
        }
        self.highlight_selectable(grid);

        let next = grid.selectable[grid.content_index];
        let previous = self.selected_content.replace(next);
        if raise_events && previous != Some(next) {
            if let Some(previous) = previous {
                self.with_widget(previous, |w| w.on_deselect());
            }
            self.with_widget(next, |w| w.on_select());
            self.events.push(NavEvent::ContentSelected {
                grid: grid_id,
                node: next,
                index: grid.content_index,
            });
        }
    }

    /// Confirm on focused content: press now, click after the debounce window.
    pub(crate) fn click_panel_content(&mut self, grid_id: NodeId, grid: &mut PanelGrid, clock: &Clock) {
        if grid.pending_click.is_some() {
            return;
        }
        let Some(node) = grid.focused_content() else {
            return;
        };
        grid.pending_click = Some(PendingClick {
            node,
            deadline: Deadline::after(clock, self.config.content_click_timeout()),
        });
        self.clicked_content = Some(node);
        self.nodes[node.0].highlight = Highlight::Pressed;
        debug!(grid = %grid_id, node = %node, "content pressed");
        self.events.push(NavEvent::ContentPressed { node });
    }

    pub(crate) fn fire_pending_click(&mut self, grid_id: NodeId, grid: &mut PanelGrid, clock: &Clock) {
        let Some(pending) = grid.pending_click else {
            return;
        };
        if !pending.deadline.is_due(clock) {
            return;
        }
        grid.pending_click = None;
        self.clicked_content = None;
        if self.get(pending.node).is_some_and(Node::is_reachable) {
            self.activate(pending.node);
        } else {
            debug!(node = %pending.node, "click target went away");
        }
        self.select_current_child(grid_id, grid, false);
    }

    /// Re-check cached selection state against the tree before input runs.
    pub(crate) fn revalidate(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        match grid.mode {
            SelectionMode::PanelRoot => {}
            SelectionMode::Panel => {
                let stale = grid
                    .selected_panel
                    .is_some_and(|p| p != grid_id && !self.is_navigable_panel(p));
                if stale {
                    warn!(grid = %grid_id, "selected panel can no longer take focus, reassigning");
                    self.select_panel_at_cursor(grid_id, grid);
                }
            }
            SelectionMode::PanelContent => {
                let panel = grid.selected_panel;
                let panel_ok = panel.is_some_and(|p| p == grid_id || self.is_navigable_panel(p));
                let fresh = panel
                    .map(|p| self.selectable_children(p))
                    .unwrap_or_default();
                if !panel_ok || fresh.is_empty() {
                    warn!(grid = %grid_id, "content went away, leaving content mode");
                    self.panel_mode_out(grid_id, grid);
                    return;
                }
                if fresh == grid.selectable {
                    return;
                }

                grid.selectable = fresh;
                if grid.content_index >= grid.selectable.len() {
                    warn!(grid = %grid_id, index = grid.content_index, "stale content index, clamping to 0");
                    grid.content_index = 0;
                }
                let orphaned = grid
                    .pending_click
                    .is_some_and(|p| !grid.selectable.contains(&p.node));
                if orphaned {
                    grid.pending_click = None;
                    self.clicked_content = None;
                }
                self.set_content_state(grid_id, SelectionState::Disabled);
                self.select_current_child(grid_id, grid, true);
            }
        }
    }
}
