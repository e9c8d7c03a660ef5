use crate::config::{Color, Skin};
use crate::nav::focusable::{Focusable, WidgetView};
use crate::nav::types::{Anchor, HierarchyTag, Highlight, NodeId};
use std::fmt;

/// Click handler attached to a node, invoked with the node's id.
pub type ClickHandler = Box<dyn FnMut(NodeId)>;

/// One element of a navigation tree.
///
/// `enabled` and `visible` belong to the host. `suspended` is set by the
/// navigator while a grid is in content mode and only blocks pointer input.
pub struct Node {
    pub(crate) id: NodeId,
    pub identifier: String,
    pub(crate) tag: HierarchyTag,
    pub(crate) enabled: bool,
    pub(crate) visible: bool,
    pub(crate) suspended: bool,
    pub highlight: Highlight,
    pub skin: Skin,
    pub fill: Color,
    /// Width and height, fractions of the parent when <= 1
    pub size: [f32; 2],
    pub anchor: Anchor,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) widget: Option<Box<dyn Focusable>>,
    pub(crate) on_click: Option<ClickHandler>,
}

impl Node {
    pub(crate) fn new(identifier: impl Into<String>, tag: HierarchyTag) -> Self {
        Self {
            id: NodeId(0),
            identifier: identifier.into(),
            tag,
            enabled: true,
            visible: true,
            suspended: false,
            highlight: Highlight::None,
            skin: Skin::None,
            fill: Color::WHITE,
            size: [0.0, 0.0],
            anchor: Anchor::Auto,
            parent: None,
            children: Vec::new(),
            widget: None,
            on_click: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> HierarchyTag {
        self.tag
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    /// Enabled and visible: the host allows focus here.
    pub fn is_reachable(&self) -> bool {
        self.enabled && self.visible
    }

    /// Whether a pointer may interact with the node right now.
    pub fn pointer_interactive(&self) -> bool {
        self.is_reachable() && !self.suspended
    }

    pub fn widget(&self) -> Option<&dyn Focusable> {
        self.widget.as_deref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut (dyn Focusable + 'static)> {
        self.widget.as_deref_mut()
    }

    pub fn view(&self) -> Option<WidgetView> {
        self.widget.as_ref().map(|w| w.view())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("tag", &self.tag)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("suspended", &self.suspended)
            .field("highlight", &self.highlight)
            .field("children", &self.children)
            .field("widget", &self.view())
            .finish()
    }
}
