use crate::nav::pure::ROW_LEN;
use crate::nav::timer::Deadline;
use crate::nav::types::{GridLayout, NodeId, Overflow, SelectionDimension, SelectionMode};

/// Whether a grid is the top of its tree or nested inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRole {
    Root(SelectionDimension),
    Nested,
}

/// Vertical scroll position of an overflowing grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scrollbar {
    pub value: f32,
    /// Computed from the row heights on first use
    pub max: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingClick {
    pub node: NodeId,
    pub deadline: Deadline,
}

/// Selection cursor and lock token of one panel grid.
#[derive(Debug, Clone)]
pub struct PanelGrid {
    pub(crate) role: GridRole,
    pub(crate) mode: SelectionMode,
    pub(crate) panel_count: usize,
    pub(crate) panel_index: usize,
    pub(crate) default_panel_index: usize,
    pub(crate) content_index: usize,
    pub(crate) locked: bool,
    pub(crate) invisible: bool,
    pub(crate) selected_panel: Option<NodeId>,
    pub(crate) selectable: Vec<NodeId>,
    pub(crate) overflow: Overflow,
    pub(crate) scrollbar: Option<Scrollbar>,
    pub(crate) layout: Option<GridLayout>,
    pub(crate) previous_layout: Option<GridLayout>,
    pub(crate) pending_click: Option<PendingClick>,
}

impl PanelGrid {
    pub(crate) fn new(role: GridRole, panel_count: usize) -> Self {
        let overflow = if panel_count > 2 * ROW_LEN {
            Overflow::VerticalScroll
        } else {
            Overflow::Overflow
        };
        Self {
            role,
            mode: SelectionMode::PanelRoot,
            panel_count,
            panel_index: 0,
            default_panel_index: 0,
            content_index: 0,
            locked: true,
            invisible: false,
            selected_panel: None,
            selectable: Vec::new(),
            overflow,
            scrollbar: (overflow == Overflow::VerticalScroll).then(Scrollbar::default),
            layout: None,
            previous_layout: None,
            pending_click: None,
        }
    }

    pub fn role(&self) -> GridRole {
        self.role
    }

    pub fn is_root(&self) -> bool {
        matches!(self.role, GridRole::Root(_))
    }

    pub fn dimension(&self) -> Option<SelectionDimension> {
        match self.role {
            GridRole::Root(d) => Some(d),
            GridRole::Nested => None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn panel_index(&self) -> usize {
        self.panel_index
    }

    pub fn default_panel_index(&self) -> usize {
        self.default_panel_index
    }

    pub fn content_index(&self) -> usize {
        self.content_index
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_invisible(&self) -> bool {
        self.invisible
    }

    pub fn selected_panel(&self) -> Option<NodeId> {
        self.selected_panel
    }

    pub fn selectable(&self) -> &[NodeId] {
        &self.selectable
    }

    /// Content node the cursor is on, when in content mode
    pub fn focused_content(&self) -> Option<NodeId> {
        match self.mode {
            SelectionMode::PanelContent => self.selectable.get(self.content_index).copied(),
            _ => None,
        }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn scrollbar(&self) -> Option<Scrollbar> {
        self.scrollbar
    }

    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    pub fn has_pending_click(&self) -> bool {
        self.pending_click.is_some()
    }

    pub fn row_count(&self) -> usize {
        self.panel_count / ROW_LEN
    }

    pub fn current_row(&self) -> usize {
        self.panel_index / ROW_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_starts_locked_at_root() {
        let grid = PanelGrid::new(GridRole::Nested, 9);
        assert!(grid.is_locked());
        assert_eq!(grid.mode(), SelectionMode::PanelRoot);
        assert_eq!(grid.overflow(), Overflow::VerticalScroll);
        assert!(grid.scrollbar().is_some());
        assert_eq!(grid.focused_content(), None);
    }

    #[test]
    fn test_six_panels_do_not_scroll() {
        let grid = PanelGrid::new(GridRole::Nested, 6);
        assert_eq!(grid.overflow(), Overflow::Overflow);
        assert_eq!(grid.row_count(), 2);
    }
}
