// Skins, fills and highlight states the machine writes onto nodes

use crate::config::{Color, Skin};
use crate::nav::grid::PanelGrid;
use crate::nav::tree::NavTree;
use crate::nav::types::{HierarchyTag, Highlight, NodeId, SelectionState};

impl NavTree {
    fn resting_fill(&self, grid: &PanelGrid) -> Color {
        if grid.invisible {
            Color::TRANSPARENT
        } else {
            self.config.default_color
        }
    }

    /// Repaint the panels of a grid: the selected one gets the selected skin.
    pub(crate) fn paint_panels(&mut self, grid_id: NodeId, grid: &PanelGrid) {
        let fill = self.resting_fill(grid);
        let (default_skin, selected_skin) = (self.config.default_skin, self.config.selected_skin);
        for panel in self.panels(grid_id) {
            let node = &mut self.nodes[panel.0];
            node.skin = if grid.selected_panel == Some(panel) {
                selected_skin
            } else {
                default_skin
            };
            node.fill = fill;
        }
    }

    /// Outline of the grid node itself while it holds the cursor.
    pub(crate) fn paint_grid_focus(&mut self, grid_id: NodeId, grid: &PanelGrid, focused: bool) {
        let skin = match (focused, grid.is_root()) {
            (true, false) => self.config.default_skin,
            _ => Skin::None,
        };
        let fill = match (focused, grid.invisible) {
            (_, true) => Color::TRANSPARENT,
            (true, false) => self.config.selected_color,
            (false, false) => self.config.default_color,
        };
        let node = &mut self.nodes[grid_id.0];
        node.skin = skin;
        node.fill = fill;
    }

    /// Content directly in the grid or one level down inside its panels.
    pub(crate) fn grid_content(&self, grid_id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for child in &self.nodes[grid_id.0].children {
            let node = &self.nodes[child.0];
            match node.tag {
                HierarchyTag::PanelContent => out.push(*child),
                HierarchyTag::Panel => out.extend(
                    node.children
                        .iter()
                        .copied()
                        .filter(|c| self.nodes[c.0].tag == HierarchyTag::PanelContent),
                ),
                _ => {}
            }
        }
        out
    }

    /// Bulk enable or suspend every content node of a grid.
    pub(crate) fn set_content_state(&mut self, grid_id: NodeId, state: SelectionState) {
        let default_color = self.config.default_color;
        for id in self.grid_content(grid_id) {
            let node = &mut self.nodes[id.0];
            let tint = node
                .widget
                .as_deref()
                .is_none_or(|w| w.tint_on_bulk_update());
            node.highlight = Highlight::None;
            match state {
                SelectionState::Enabled => {
                    node.suspended = false;
                    if tint {
                        node.fill = default_color;
                    }
                }
                SelectionState::Disabled => node.suspended = true,
            }
        }
    }

    /// Wake the selectable content and mark the one under the cursor.
    pub(crate) fn highlight_selectable(&mut self, grid: &PanelGrid) {
        let (default_color, selected_color) = (self.config.default_color, self.config.selected_color);
        for (i, id) in grid.selectable.iter().enumerate() {
            let node = &mut self.nodes[id.0];
            node.suspended = false;
            if i == grid.content_index {
                node.fill = selected_color;
                node.highlight = Highlight::Hovered;
            } else {
                node.fill = default_color;
                node.highlight = Highlight::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Color, NavConfig, Skin};
    use crate::nav::tree::NavTree;
    use crate::nav::types::{GridLayout, Highlight, SelectionDimension, SelectionState};
    use crate::widgets::{Button, SelectList};

    #[test]
    fn test_bulk_update_skips_untinted_widgets() {
        let cfg = NavConfig::default();
        let mut tree = NavTree::new(&cfg, GridLayout::Default, SelectionDimension::Flat);
        let panel = tree.panels(tree.root())[0];
        let button = tree.add_content(panel, "b", Button::new("b")).unwrap();
        let list = tree
            .add_content(panel, "l", SelectList::new(["x", "y"]))
            .unwrap();
        for id in [button, list] {
            let node = tree.node_mut(id).unwrap();
            node.fill = Color::LIGHT_PINK;
            node.highlight = Highlight::Hovered;
        }

        tree.set_content_state(tree.root(), SelectionState::Disabled);
        assert!(tree.node(button).unwrap().suspended());
        assert_eq!(tree.node(button).unwrap().highlight, Highlight::None);

        tree.set_content_state(tree.root(), SelectionState::Enabled);
        assert!(!tree.node(button).unwrap().suspended());
        assert_eq!(tree.node(button).unwrap().fill, cfg.default_color);
        assert_eq!(tree.node(list).unwrap().fill, Color::LIGHT_PINK);
    }

    #[test]
    fn test_paint_panels_marks_selection() {
        let cfg = NavConfig::default();
        let mut tree = NavTree::new(&cfg, GridLayout::Default, SelectionDimension::Flat);
        let root = tree.root();
        let panels = tree.panels(root);
        let mut grid = tree.grids.remove(&root).unwrap();
        grid.selected_panel = Some(panels[3]);
        tree.paint_panels(root, &grid);
        assert_eq!(tree.node(panels[3]).unwrap().skin, Skin::Fancy);
        assert_eq!(tree.node(panels[4]).unwrap().skin, Skin::Simple);
    }
}
