pub mod operations;
pub mod pure;
pub mod types;

// Re-export types
pub use types::{Button, ButtonSet, Direction, PadSource, RawPadState, Stick};

// Re-export operations
pub use operations::{EvdevPad, PadInput, VirtualPad, scan_pads};
