pub mod focusable;
pub mod grid;
pub mod navigator;
pub mod node;
pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod timer;
pub mod tree;
pub mod types;


// Re-export types
pub use focusable::{Capture, Focusable, WidgetView};
pub use grid::{GridRole, PanelGrid, Scrollbar};
pub use node::{ClickHandler, Node};
pub use timer::{Clock, Deadline};
pub use types::{
    Anchor, Direction, GridLayout, HierarchyTag, Highlight, NavEvent, NodeId, Overflow,
    SelectionDimension, SelectionMode, SelectionState, TabLocation,
};

// Re-export the tree and its driver
pub use navigator::{Navigator, ScreenId};
pub use pipelines::NavContext;
pub use tree::{CENTER_SLOT, NavTree};
