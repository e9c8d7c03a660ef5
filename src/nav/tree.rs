use crate::composite::tabs::TabSet;
use crate::config::NavConfig;
use crate::error::{NavError, Result};
use crate::nav::focusable::{Focusable, WidgetView};
use crate::nav::grid::{GridRole, PanelGrid};
use crate::nav::node::{ClickHandler, Node};
use crate::nav::pure::{ROW_LEN, preset};
use crate::nav::types::{
    GridLayout, HierarchyTag, Highlight, NavEvent, NodeId, Overflow, SelectionDimension,
};
use crate::widgets::Label;
use std::collections::HashMap;
use tracing::debug;

/// Index of the center slot of a 3x3 grid.
pub const CENTER_SLOT: usize = 4;

/// One independently navigable screen: an arena of nodes rooted at a 3x3
/// root grid, plus the selection state of every grid in it.
pub struct NavTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) grids: HashMap<NodeId, PanelGrid>,
    pub(crate) tabs: HashMap<NodeId, TabSet>,
    pub(crate) root: NodeId,
    pub(crate) config: NavConfig,
    pub(crate) selected_content: Option<NodeId>,
    pub(crate) clicked_content: Option<NodeId>,
    pub(crate) events: Vec<NavEvent>,
}

impl NavTree {
    /// Build a root grid with nine slot panels sized by `layout`.
    ///
    /// The tree starts locked; `start_panel_selection` hands it the lock.
    pub fn new(config: &NavConfig, layout: GridLayout, dimension: SelectionDimension) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            grids: HashMap::new(),
            tabs: HashMap::new(),
            root: NodeId(0),
            config: config.clone(),
            selected_content: None,
            clicked_content: None,
            events: Vec::new(),
        };

        let mut root = Node::new("Root", HierarchyTag::RootGrid);
        root.size = [1.0, 1.0];
        let root = tree.push(None, root);
        tree.root = root;

        for slot in preset(layout).slots {
            let mut panel = Node::new(format!("{:?}", slot.anchor), HierarchyTag::Panel);
            panel.anchor = slot.anchor;
            panel.size = slot.size;
            panel.skin = config.default_skin;
            panel.fill = config.default_color;
            tree.push(Some(root), panel);
        }

        let mut grid = PanelGrid::new(GridRole::Root(dimension), 9);
        grid.overflow = Overflow::Overflow;
        grid.scrollbar = None;
        grid.layout = Some(layout);
        grid.default_panel_index = CENTER_SLOT;
        grid.panel_index = CENTER_SLOT;
        tree.grids.insert(root, grid);
        tree
    }

    fn push(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.id = id;
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn push_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        self.node(parent)?;
        Ok(self.push(Some(parent), node))
    }

    /// Add a nested grid of `panel_count` panels laid out in rows of three.
    pub fn add_panel_grid(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        panel_count: usize,
    ) -> Result<NodeId> {
        if panel_count == 0 || panel_count % ROW_LEN != 0 {
            return Err(NavError::InvalidPanelCount(panel_count));
        }
        let identifier = identifier.into();
        let mut node = Node::new(identifier.clone(), HierarchyTag::PanelGrid);
        node.size = [1.0, 1.0];
        let grid_id = self.push_child(parent, node)?;

        let rows = panel_count / ROW_LEN;
        for i in 0..panel_count {
            let mut panel = Node::new(format!("{identifier} #{i}"), HierarchyTag::Panel);
            panel.anchor = crate::nav::types::Anchor::AutoInline;
            panel.size = [1.0 / ROW_LEN as f32, 1.0 / rows as f32];
            panel.skin = self.config.default_skin;
            panel.fill = self.config.default_color;
            self.push(Some(grid_id), panel);
        }

        self.grids
            .insert(grid_id, PanelGrid::new(GridRole::Nested, panel_count));
        debug!(grid = %grid_id, panel_count, "added panel grid");
        Ok(grid_id)
    }

    /// Add a grid without panels. It selects itself and goes straight to its
    /// content on entry; `invisible` wrappers draw with a transparent fill.
    pub fn add_content_grid(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        invisible: bool,
    ) -> Result<NodeId> {
        let mut node = Node::new(identifier, HierarchyTag::PanelGrid);
        node.size = [1.0, 1.0];
        if invisible {
            node.fill = crate::config::Color::TRANSPARENT;
        }
        let grid_id = self.push_child(parent, node)?;
        let mut grid = PanelGrid::new(GridRole::Nested, 0);
        grid.invisible = invisible;
        self.grids.insert(grid_id, grid);
        Ok(grid_id)
    }

    /// Add a focusable leaf to a panel (or content grid).
    pub fn add_content(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        widget: impl Focusable + 'static,
    ) -> Result<NodeId> {
        let mut node = Node::new(identifier, HierarchyTag::PanelContent);
        node.fill = self.config.default_color;
        node.widget = Some(Box::new(widget));
        self.push_child(parent, node)
    }

    /// Add a non-navigable text node.
    pub fn add_label(&mut self, parent: NodeId, text: impl Into<String>) -> Result<NodeId> {
        let text = text.into();
        let mut node = Node::new(text.clone(), HierarchyTag::None);
        node.widget = Some(Box::new(Label::new(text)));
        self.push_child(parent, node)
    }

    /// Add a plain container node with an explicit tag. Grids and panels
    /// come from `add_panel_grid`/`add_content_grid` so panel counts stay
    /// in step with the grid state.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        identifier: impl Into<String>,
        tag: HierarchyTag,
    ) -> Result<NodeId> {
        if matches!(
            tag,
            HierarchyTag::RootGrid | HierarchyTag::PanelGrid | HierarchyTag::Panel
        ) {
            return Err(NavError::ReservedTag(tag));
        }
        self.push_child(parent, Node::new(identifier, tag))
    }

    pub fn set_on_click(&mut self, id: NodeId, handler: impl FnMut(NodeId) + 'static) -> Result<()> {
        let handler: ClickHandler = Box::new(handler);
        self.node_mut(id)?.on_click = Some(handler);
        Ok(())
    }

    pub fn set_size(&mut self, id: NodeId, size: [f32; 2]) -> Result<()> {
        self.node_mut(id)?.size = size;
        Ok(())
    }

    /// Show or hide a node. The node and every descendant hear about it.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.visible == visible {
            return Ok(());
        }
        node.visible = visible;
        for id in std::iter::once(id).chain(self.descendants(id)) {
            if let Some(widget) = self.nodes[id.0].widget.as_deref_mut() {
                widget.on_visibility_changed(visible);
            }
        }
        Ok(())
    }

    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) -> Result<()> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    pub fn set_default_panel_index(&mut self, grid: NodeId, index: usize) -> Result<()> {
        let state = self.grids.get_mut(&grid).ok_or(NavError::NotAGrid(grid))?;
        if index >= state.panel_count.max(1) {
            return Err(NavError::InvalidPanelIndex {
                index,
                panel_count: state.panel_count,
            });
        }
        state.default_panel_index = index;
        Ok(())
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(NavError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(NavError::UnknownNode(id))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn grid(&self, id: NodeId) -> Option<&PanelGrid> {
        self.grids.get(&id)
    }

    pub fn root_grid(&self) -> Option<&PanelGrid> {
        self.grids.get(&self.root)
    }

    pub fn view(&self, id: NodeId) -> Option<WidgetView> {
        self.get(id).and_then(Node::view)
    }

    /// Content under the cursor of the grid that currently holds the lock
    pub fn selected_content(&self) -> Option<NodeId> {
        self.selected_content
    }

    /// Content whose deferred click is waiting to fire
    pub fn clicked_content(&self) -> Option<NodeId> {
        self.clicked_content
    }

    /// Events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// Depth-first search from the root for a node by identifier.
    pub fn find(&self, identifier: &str) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|id| self.nodes[id.0].identifier == identifier)
    }

    /// Every node below `id`, depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// First visible, enabled descendant of `start` with `tag`, breadth-first.
    /// Hidden subtrees are not entered.
    pub fn find_reachable_tagged(&self, start: NodeId, tag: HierarchyTag) -> Option<NodeId> {
        let mut queue: std::collections::VecDeque<NodeId> =
            self.get(start)?.children.iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id.0];
            if !node.is_reachable() {
                continue;
            }
            if node.tag == tag {
                return Some(id);
            }
            queue.extend(node.children.iter().copied());
        }
        None
    }

    /// Panels of a grid, in row-major order.
    pub fn panels(&self, grid: NodeId) -> Vec<NodeId> {
        self.get(grid)
            .map(|g| {
                g.children
                    .iter()
                    .copied()
                    .filter(|c| self.nodes[c.0].tag == HierarchyTag::Panel)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Enabled, visible content children of a panel.
    pub fn selectable_children(&self, panel: NodeId) -> Vec<NodeId> {
        self.get(panel)
            .map(|p| {
                p.children
                    .iter()
                    .copied()
                    .filter(|c| {
                        let n = &self.nodes[c.0];
                        n.tag == HierarchyTag::PanelContent && n.is_reachable()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A panel can take the cursor when it is enabled, visible and either
    /// empty or showing at least one child.
    pub fn is_navigable_panel(&self, panel: NodeId) -> bool {
        let Some(node) = self.get(panel) else {
            return false;
        };
        node.is_reachable()
            && (node.children.is_empty()
                || node.children.iter().any(|c| self.nodes[c.0].visible))
    }

    /// The node and all its ancestors are enabled and visible.
    pub fn is_path_reachable(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.get(current) {
                Some(node) if node.is_reachable() => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Nearest ancestor of `id` that is a grid.
    pub fn parent_grid(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.get(id)?.parent;
        while let Some(current) = cursor {
            if self.grids.contains_key(&current) {
                return Some(current);
            }
            cursor = self.nodes[current.0].parent;
        }
        None
    }

    /// Grids whose lock is released, in id order.
    pub fn unlocked_grids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .grids
            .iter()
            .filter(|(_, g)| !g.locked)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub(crate) fn lock_all(&mut self) {
        for grid in self.grids.values_mut() {
            grid.locked = true;
            grid.pending_click = None;
        }
        self.clicked_content = None;
    }

    /// Move `id` under `new_parent`, keeping its subtree.
    ///
    /// Fails when `new_parent` is `id` or lies below it, and when a panel
    /// would be added to a grid outside `add_panel_grid`.
    pub fn reparent(&mut self, id: NodeId, new_parent: NodeId) -> Result<()> {
        self.node(new_parent)?;
        let node = self.node(id)?;
        let (old_parent, tag) = (node.parent, node.tag);
        if self.is_within(new_parent, id) {
            return Err(NavError::CyclicParent {
                node: id,
                parent: new_parent,
            });
        }
        if tag == HierarchyTag::Panel && self.grids.contains_key(&new_parent) {
            return Err(NavError::InvalidPanelCount(self.panels(new_parent).len() + 1));
        }
        if let Some(old) = old_parent {
            self.nodes[old.0].children.retain(|c| *c != id);
        }
        self.nodes[id.0].parent = Some(new_parent);
        self.nodes[new_parent.0].children.push(id);
        Ok(())
    }

    /// Whether `id` is `ancestor` or sits somewhere below it.
    fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.get(current).and_then(|n| n.parent);
        }
        false
    }

    pub(crate) fn retag(&mut self, id: NodeId, tag: HierarchyTag) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.tag = tag;
        }
    }

    /// Run `f` with a grid's state taken out of the map so the tree can be
    /// mutated alongside it.
    pub(crate) fn with_grid<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut NavTree, &mut PanelGrid) -> R,
    ) -> Option<R> {
        let mut grid = self.grids.remove(&id)?;
        let out = f(self, &mut grid);
        self.grids.insert(id, grid);
        Some(out)
    }

    /// Widget hook call on a reachable node; no-op otherwise.
    pub(crate) fn with_widget<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Focusable) -> R,
    ) -> Option<R> {
        let node = self.nodes.get_mut(id.0)?;
        if !node.is_reachable() {
            return None;
        }
        node.widget.as_deref_mut().map(|widget| f(widget))
    }

    /// Deliver a click: widget hook, node handler, exclusive-group update.
    pub(crate) fn activate(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        let identifier = node.identifier.clone();
        let mut group = None;
        if let Some(widget) = node.widget.as_deref_mut() {
            widget.on_click();
            group = widget.exclusive_group().map(str::to_owned);
        }
        if let Some(handler) = node.on_click.as_mut() {
            handler(id);
        }
        if let Some(group) = group {
            self.clear_exclusive_siblings(id, &group);
        }
        debug!(node = %id, %identifier, "content clicked");
        self.events.push(NavEvent::ContentClicked {
            node: id,
            identifier,
        });
    }

    fn clear_exclusive_siblings(&mut self, id: NodeId, group: &str) {
        let Some(parent) = self.nodes[id.0].parent else {
            return;
        };
        let siblings = self.nodes[parent.0].children.clone();
        for sibling in siblings.into_iter().filter(|s| *s != id) {
            if let Some(widget) = self.nodes[sibling.0].widget.as_deref_mut() {
                if widget.exclusive_group() == Some(group) {
                    widget.clear_exclusive();
                }
            }
        }
    }

    /// Pointer click on a node the machine has not suspended.
    pub fn pointer_click(&mut self, id: NodeId) -> bool {
        let interactive = self.get(id).is_some_and(Node::pointer_interactive);
        if !interactive || !self.is_path_reachable(id) {
            return false;
        }
        self.activate(id);
        true
    }

    /// Pointer entering (`hovering`) or leaving a node.
    pub fn pointer_hover(&mut self, id: NodeId, hovering: bool) -> bool {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return false;
        };
        if !node.pointer_interactive() {
            return false;
        }
        let was_hovered = node.highlight != Highlight::None;
        node.highlight = if hovering {
            Highlight::Hovered
        } else {
            Highlight::None
        };
        if let Some(widget) = node.widget.as_deref_mut() {
            match (was_hovered, hovering) {
                (false, true) => widget.on_select(),
                (true, false) => widget.on_deselect(),
                (true, true) => widget.while_hover(),
                (false, false) => {}
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::types::SelectionMode;
    use crate::widgets::{Button, DropDown, SelectList};

    fn tree() -> NavTree {
        NavTree::new(
            &NavConfig::default(),
            GridLayout::Default,
            SelectionDimension::Deep,
        )
    }

    #[test]
    fn test_root_has_nine_slot_panels() {
        let tree = tree();
        let panels = tree.panels(tree.root());
        assert_eq!(panels.len(), 9);
        assert_eq!(tree.node(panels[4]).unwrap().identifier, "Center");
        let grid = tree.root_grid().unwrap();
        assert!(grid.is_locked());
        assert_eq!(grid.mode(), SelectionMode::PanelRoot);
        assert_eq!(grid.default_panel_index(), CENTER_SLOT);
    }

    #[test]
    fn test_panel_count_must_be_multiple_of_three() {
        let mut tree = tree();
        let center = tree.panels(tree.root())[4];
        assert!(matches!(
            tree.add_panel_grid(center, "bad", 4),
            Err(NavError::InvalidPanelCount(4))
        ));
        assert!(matches!(
            tree.add_panel_grid(center, "empty", 0),
            Err(NavError::InvalidPanelCount(0))
        ));
        assert!(tree.add_panel_grid(center, "ok", 12).is_ok());
    }

    #[test]
    fn test_find_and_reparent() {
        let mut tree = tree();
        let panels = tree.panels(tree.root());
        let button = tree.add_content(panels[0], "Go", Button::new("Go")).unwrap();
        assert_eq!(tree.find("Go"), Some(button));

        tree.reparent(button, panels[1]).unwrap();
        assert_eq!(tree.node(button).unwrap().parent(), Some(panels[1]));
        assert!(tree.node(panels[0]).unwrap().children().is_empty());
        assert_eq!(tree.selectable_children(panels[1]), vec![button]);
    }

    #[test]
    fn test_reparent_under_own_subtree_fails() {
        let mut tree = tree();
        let center = tree.panels(tree.root())[4];
        let grid = tree.add_panel_grid(center, "inner", 3).unwrap();
        let inner_panel = tree.panels(grid)[0];
        assert!(matches!(
            tree.reparent(grid, inner_panel),
            Err(NavError::CyclicParent { node, parent }) if node == grid && parent == inner_panel
        ));
        assert!(matches!(
            tree.reparent(grid, grid),
            Err(NavError::CyclicParent { .. })
        ));
        assert_eq!(tree.node(grid).unwrap().parent(), Some(center));
        assert_eq!(tree.descendants(grid).len(), 3);
    }

    #[test]
    fn test_panels_only_come_from_grid_builders() {
        let mut tree = tree();
        let root = tree.root();
        for tag in [HierarchyTag::Panel, HierarchyTag::PanelGrid, HierarchyTag::RootGrid] {
            assert!(matches!(
                tree.add_node(root, "extra", tag),
                Err(NavError::ReservedTag(t)) if t == tag
            ));
        }
        assert!(tree.add_node(root, "frame", HierarchyTag::None).is_ok());

        let center = tree.panels(root)[4];
        let grid = tree.add_panel_grid(center, "inner", 3).unwrap();
        let stray = tree.panels(grid)[2];
        assert!(matches!(
            tree.reparent(stray, root),
            Err(NavError::InvalidPanelCount(10))
        ));
        assert_eq!(tree.panels(root).len(), 9);
        assert_eq!(tree.panels(grid).len(), 3);
    }

    #[test]
    fn test_default_panel_index_out_of_range() {
        let mut tree = tree();
        let root = tree.root();
        assert!(matches!(
            tree.set_default_panel_index(root, 9),
            Err(NavError::InvalidPanelIndex {
                index: 9,
                panel_count: 9
            })
        ));
        tree.set_default_panel_index(root, 8).unwrap();
        assert_eq!(tree.root_grid().unwrap().default_panel_index(), 8);
    }

    #[test]
    fn test_hiding_a_panel_closes_dropdowns_inside() {
        let mut tree = tree();
        let panel = tree.panels(tree.root())[1];
        let dropdown = tree
            .add_content(panel, "class", DropDown::new(SelectList::new(["Mage", "Monk"])))
            .unwrap();
        assert!(tree.pointer_click(dropdown));
        assert!(matches!(
            tree.view(dropdown),
            Some(WidgetView::DropDown { open: true, .. })
        ));

        tree.set_visible(panel, false).unwrap();
        assert!(matches!(
            tree.view(dropdown),
            Some(WidgetView::DropDown { open: false, selected: Some(0), .. })
        ));
    }

    #[test]
    fn test_panel_with_all_children_hidden_is_not_navigable() {
        let mut tree = tree();
        let panel = tree.panels(tree.root())[2];
        assert!(tree.is_navigable_panel(panel));
        let a = tree.add_content(panel, "a", Button::new("a")).unwrap();
        let b = tree.add_content(panel, "b", Button::new("b")).unwrap();
        tree.set_visible(a, false).unwrap();
        assert!(tree.is_navigable_panel(panel));
        tree.set_visible(b, false).unwrap();
        assert!(!tree.is_navigable_panel(panel));
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let mut tree = tree();
        assert!(matches!(
            tree.add_label(NodeId(999), "x"),
            Err(NavError::UnknownNode(NodeId(999)))
        ));
    }

    #[test]
    fn test_pointer_click_respects_suspension() {
        let mut tree = tree();
        let panel = tree.panels(tree.root())[0];
        let button = tree.add_content(panel, "Go", Button::new("Go")).unwrap();
        assert!(tree.pointer_click(button));
        tree.nodes[button.0].suspended = true;
        assert!(!tree.pointer_click(button));
        let events = tree.drain_events();
        assert_eq!(events.len(), 1);
    }
}
