use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use crate::input::Direction;

/// Index of a node inside its `NavTree` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role a node plays in the navigation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyTag {
    /// Top-level 3x3 grid of a screen
    RootGrid,
    /// Nested grid of panels
    PanelGrid,
    /// Selectable cell of a grid
    Panel,
    /// Focusable leaf inside a panel
    PanelContent,
    /// Decoration; skipped by traversal
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Hovered,
    Pressed,
}

/// Which level of a grid the cursor is moving on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Grid itself is the focused thing, no panel is highlighted
    PanelRoot,
    /// Cursor moves between panels
    Panel,
    /// Cursor moves between the focusable content of one panel
    PanelContent,
}

/// Whether Confirm on a root panel descends into a nested grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDimension {
    Flat,
    #[default]
    Deep,
}

/// Bulk state applied to all content of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Enabled,
    Disabled,
}

/// Placement of a node in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Auto,
    AutoInline,
}

impl Anchor {
    /// The nine anchors of a 3x3 grid, row-major.
    pub const SLOTS: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    pub fn slot_index(self) -> Option<usize> {
        Self::SLOTS.iter().position(|a| *a == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Overflow,
    VerticalScroll,
}

/// Where a tab set draws its page headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLocation {
    #[default]
    Top,
    Bottom,
    Invisible,
}

/// The six 3x3 layout presets a root grid can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GridLayout {
    #[default]
    Default,
    SmallCorners,
    SmallCornersVerticals,
    SmallCornersWideVerticals,
    SmallCornersUltraWideVerticals,
    SmallCornersUltraWideVerticalsHorizontals,
}

impl GridLayout {
    pub const ALL: [GridLayout; 6] = [
        GridLayout::Default,
        GridLayout::SmallCorners,
        GridLayout::SmallCornersVerticals,
        GridLayout::SmallCornersWideVerticals,
        GridLayout::SmallCornersUltraWideVerticals,
        GridLayout::SmallCornersUltraWideVerticalsHorizontals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GridLayout::Default => "default",
            GridLayout::SmallCorners => "small-corners",
            GridLayout::SmallCornersVerticals => "small-corners-verticals",
            GridLayout::SmallCornersWideVerticals => "small-corners-wide-verticals",
            GridLayout::SmallCornersUltraWideVerticals => "small-corners-ultra-wide-verticals",
            GridLayout::SmallCornersUltraWideVerticalsHorizontals => {
                "small-corners-ultra-wide-verticals-horizontals"
            }
        }
    }
}

impl FromStr for GridLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridLayout::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| format!("unknown layout '{s}'"))
    }
}

/// Observable outcome of a navigation tick.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ModeChanged { grid: NodeId, mode: SelectionMode },
    PanelSelected { grid: NodeId, panel: NodeId, index: usize },
    ContentSelected { grid: NodeId, node: NodeId, index: usize },
    ContentPressed { node: NodeId },
    ContentClicked { node: NodeId, identifier: String },
    ValueChanged { node: NodeId },
    Descended { from: NodeId, to: NodeId },
    Ascended { from: NodeId, to: NodeId },
    TabChanged { tabs: NodeId, page: NodeId, index: usize },
    LayoutChanged { grid: NodeId, layout: GridLayout },
    ModalConfirmed { index: usize, label: String },
    ModalDismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_indices_are_row_major() {
        assert_eq!(Anchor::TopLeft.slot_index(), Some(0));
        assert_eq!(Anchor::Center.slot_index(), Some(4));
        assert_eq!(Anchor::BottomRight.slot_index(), Some(8));
        assert_eq!(Anchor::Auto.slot_index(), None);
        assert_eq!(Anchor::AutoInline.slot_index(), None);
    }

    #[test]
    fn test_layout_names_parse_back() {
        for layout in GridLayout::ALL {
            assert_eq!(layout.name().parse::<GridLayout>(), Ok(layout));
        }
        assert!("diagonal".parse::<GridLayout>().is_err());
    }
}
