//! Gamepad focus navigation for retained-mode panel trees.
//!
//! A root 3x3 grid of panels owns the gamepad focus of a screen. The D-pad
//! moves a cursor across panels, Confirm descends (root grid -> nested grid ->
//! panel content) and Cancel climbs back out. Only one grid along a path
//! holds the unlocked lock token at a time, so a single press is never
//! consumed twice by different nesting levels.
//!
//! - `input` - logical buttons and the double-buffered edge-trigger adapter
//! - `nav` - the arena tree, the selection state machine and the `Navigator`
//! - `widgets` - `Focusable` implementations for the common controls
//! - `composite` - tab switcher, dropdown panel, select-list panel, button bar
//! - `modal` - gamepad-driven confirmation overlay

pub mod composite;
pub mod config;
pub mod error;
pub mod input;
pub mod modal;
pub mod nav;
pub mod widgets;

pub use config::{Color, NavConfig, Skin};
pub use error::{NavError, Result};
pub use input::{Button, Direction, PadInput, PadSource, RawPadState, VirtualPad};
pub use modal::{ModalOption, ModalOverlay};
pub use nav::{
    Anchor, Focusable, GridLayout, HierarchyTag, NavEvent, NavTree, Navigator, Node, NodeId,
    ScreenId, SelectionDimension, SelectionMode, WidgetView,
};
