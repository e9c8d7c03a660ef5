pub mod axis;
pub mod deadzone;
pub mod input_map;

pub use axis::AxisRange;
pub use deadzone::stick_buttons;
pub use input_map::{is_nav_key, map_hat, map_key_to_button};
