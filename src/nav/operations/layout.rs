// Runtime layout switching, slot lookup and auto-scroll

use crate::error::{NavError, Result};
use crate::nav::grid::PanelGrid;
use crate::nav::pure::{ROW_LEN, preset, row_top, scroll_max};
use crate::nav::tree::NavTree;
use crate::nav::types::{Anchor, GridLayout, NavEvent, NodeId};
use tracing::info;

impl NavTree {
    fn root_grid_state(&self, grid: NodeId) -> Result<&PanelGrid> {
        let state = self.grids.get(&grid).ok_or(NavError::NotAGrid(grid))?;
        if !state.is_root() {
            return Err(NavError::NotRootGrid(grid));
        }
        Ok(state)
    }

    /// Switch a root grid to another preset, remembering the current one.
    pub fn set_grid_layout(&mut self, grid: NodeId, layout: GridLayout) -> Result<()> {
        let previous = self.root_grid_state(grid)?.layout;
        self.apply_layout(grid, layout);
        if let Some(state) = self.grids.get_mut(&grid) {
            state.previous_layout = previous;
        }
        info!(grid = %grid, layout = layout.name(), "grid layout set");
        Ok(())
    }

    /// Swap back to the layout active before the last `set_grid_layout`.
    pub fn revert_grid_layout(&mut self, grid: NodeId) -> Result<()> {
        let state = self.root_grid_state(grid)?;
        let (current, Some(previous)) = (state.layout, state.previous_layout) else {
            return Ok(());
        };
        self.apply_layout(grid, previous);
        if let Some(state) = self.grids.get_mut(&grid) {
            state.previous_layout = current;
        }
        info!(grid = %grid, layout = previous.name(), "grid layout reverted");
        Ok(())
    }

    fn apply_layout(&mut self, grid: NodeId, layout: GridLayout) {
        let preset = preset(layout);
        for (panel, slot) in self.panels(grid).into_iter().zip(preset.slots) {
            let node = &mut self.nodes[panel.0];
            node.anchor = slot.anchor;
            node.size = slot.size;
        }
        if let Some(state) = self.grids.get_mut(&grid) {
            state.layout = Some(layout);
            if let Some(bar) = state.scrollbar.as_mut() {
                bar.max = None;
            }
        }
        for id in self.descendants(grid) {
            if let Some(widget) = self.nodes[id.0].widget.as_deref_mut() {
                widget.on_layout_changed(layout);
            }
        }
        self.events.push(NavEvent::LayoutChanged { grid, layout });
    }

    /// The panel sitting in one of the nine slots of a grid.
    pub fn grid_panel(&self, grid: NodeId, anchor: Anchor) -> Result<NodeId> {
        let slot = anchor.slot_index().ok_or(NavError::InvalidSlot(anchor))?;
        if !self.grids.contains_key(&grid) {
            return Err(NavError::NotAGrid(grid));
        }
        self.panels(grid)
            .get(slot)
            .copied()
            .ok_or(NavError::InvalidSlot(anchor))
    }

    /// Hide every panel of a grid that has no children; hidden panels are
    /// skipped by traversal.
    pub fn hide_empty_slots(&mut self, grid: NodeId) -> Result<()> {
        if !self.grids.contains_key(&grid) {
            return Err(NavError::NotAGrid(grid));
        }
        for panel in self.panels(grid) {
            if self.nodes[panel.0].children.is_empty() {
                self.set_visible(panel, false)?;
            }
        }
        Ok(())
    }

    fn row_heights(&self, grid_id: NodeId) -> Vec<f32> {
        self.panels(grid_id)
            .chunks(ROW_LEN)
            .map(|row| {
                row.iter()
                    .map(|p| self.nodes[p.0].size[1])
                    .fold(0.0, f32::max)
            })
            .collect()
    }

    /// Keep the selected row in view of an overflowing grid.
    pub(crate) fn update_scroll(&mut self, grid_id: NodeId, grid: &mut PanelGrid) {
        let Some(mut bar) = grid.scrollbar else {
            return;
        };
        let heights = self.row_heights(grid_id);
        let max = *bar.max.get_or_insert_with(|| scroll_max(&heights));
        bar.value = row_top(&heights, grid.current_row(), max);
        grid.scrollbar = Some(bar);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::NavConfig;
    use crate::error::NavError;
    use crate::nav::tree::NavTree;
    use crate::nav::types::{Anchor, GridLayout, NavEvent, SelectionDimension};
    use crate::nav::focusable::{Focusable, WidgetView};
    use crate::widgets::Button;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Content that remembers every layout it was told about.
    struct LayoutLog(Rc<RefCell<Vec<GridLayout>>>);

    impl Focusable for LayoutLog {
        fn view(&self) -> WidgetView {
            WidgetView::Label("log".into())
        }

        fn on_layout_changed(&mut self, layout: GridLayout) {
            self.0.borrow_mut().push(layout);
        }
    }

    fn tree() -> NavTree {
        NavTree::new(
            &NavConfig::default(),
            GridLayout::SmallCorners,
            SelectionDimension::Deep,
        )
    }

    #[test]
    fn test_switch_and_revert_layout() {
        let mut tree = tree();
        let root = tree.root();
        let center = tree.grid_panel(root, Anchor::Center).unwrap();
        assert_eq!(tree.node(center).unwrap().size, [0.8, 0.8]);

        tree.set_grid_layout(root, GridLayout::SmallCornersUltraWideVerticals)
            .unwrap();
        assert_eq!(tree.node(center).unwrap().size, [0.5, 0.8]);
        assert!(tree.drain_events().contains(&NavEvent::LayoutChanged {
            grid: root,
            layout: GridLayout::SmallCornersUltraWideVerticals,
        }));

        tree.revert_grid_layout(root).unwrap();
        assert_eq!(tree.node(center).unwrap().size, [0.8, 0.8]);
        assert_eq!(
            tree.root_grid().unwrap().layout(),
            Some(GridLayout::SmallCorners)
        );
    }

    #[test]
    fn test_layout_switch_reaches_nested_content() {
        let mut tree = tree();
        let root = tree.root();
        let center = tree.grid_panel(root, Anchor::Center).unwrap();
        let inner = tree.add_panel_grid(center, "inner", 3).unwrap();
        let panel = tree.panels(inner)[1];
        let seen = Rc::new(RefCell::new(Vec::new()));
        tree.add_content(panel, "log", LayoutLog(seen.clone()))
            .unwrap();

        tree.set_grid_layout(root, GridLayout::SmallCornersVerticals)
            .unwrap();
        assert_eq!(*seen.borrow(), vec![GridLayout::SmallCornersVerticals]);

        tree.revert_grid_layout(root).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![GridLayout::SmallCornersVerticals, GridLayout::SmallCorners]
        );
    }

    #[test]
    fn test_layout_only_on_root_grids() {
        let mut tree = tree();
        let center = tree.grid_panel(tree.root(), Anchor::Center).unwrap();
        let nested = tree.add_panel_grid(center, "inner", 9).unwrap();
        assert!(matches!(
            tree.set_grid_layout(nested, GridLayout::Default),
            Err(NavError::NotRootGrid(_))
        ));
    }

    #[test]
    fn test_grid_panel_rejects_non_slots() {
        let tree = tree();
        assert!(matches!(
            tree.grid_panel(tree.root(), Anchor::AutoInline),
            Err(NavError::InvalidSlot(Anchor::AutoInline))
        ));
    }

    #[test]
    fn test_hide_empty_slots() {
        let mut tree = tree();
        let root = tree.root();
        let center = tree.grid_panel(root, Anchor::Center).unwrap();
        tree.add_content(center, "b", Button::new("b")).unwrap();
        tree.hide_empty_slots(root).unwrap();
        let visible: Vec<_> = tree
            .panels(root)
            .into_iter()
            .filter(|p| tree.node(*p).unwrap().visible())
            .collect();
        assert_eq!(visible, vec![center]);
    }
}
