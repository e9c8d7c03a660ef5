pub mod grid_nav;
pub mod layout;
pub mod scroll;

pub use grid_nav::{ROW_LEN, cycle_index, find_panel_index, step_panel_index};
pub use layout::{LayoutPreset, SlotLayout, preset};
pub use scroll::{row_top, scroll_max};
