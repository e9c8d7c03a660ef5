pub mod adapter;
pub mod evdev_pad;
pub mod virtual_pad;

pub use adapter::PadInput;
pub use evdev_pad::{EvdevPad, scan_pads};
pub use virtual_pad::VirtualPad;
