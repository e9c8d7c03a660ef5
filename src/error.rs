use crate::nav::{Anchor, HierarchyTag, NodeId};
use thiserror::Error;

/// Errors raised while building or driving a navigation tree.
///
/// Everything except `Io`/`Json` is a wiring bug in the caller; the demo
/// treats those as fatal at startup.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("panel count must be a non-zero multiple of 3, got {0}")]
    InvalidPanelCount(usize),

    #[error("panel index {index} is out of range for a grid of {panel_count} panels")]
    InvalidPanelIndex { index: usize, panel_count: usize },

    #[error("{0:?} nodes can only be created by their grid builders")]
    ReservedTag(HierarchyTag),

    #[error("node {node} cannot move under {parent}, which lies inside its own subtree")]
    CyclicParent { node: NodeId, parent: NodeId },

    #[error("anchor {0:?} is not one of the nine grid slots")]
    InvalidSlot(Anchor),

    #[error("node {0} is not a root grid")]
    NotRootGrid(NodeId),

    #[error("node {0} is not a panel grid")]
    NotAGrid(NodeId),

    #[error("node {0} is not a tab set")]
    NotTabs(NodeId),

    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("unknown screen {0}")]
    UnknownScreen(usize),

    #[error("config file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
