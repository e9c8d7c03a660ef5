pub mod button_bar;
pub mod dropdown_panel;
pub mod select_list_panel;
pub mod tabs;

pub use button_bar::BarOrientation;
pub use select_list_panel::SelectListPanel;
pub use tabs::TabSet;
