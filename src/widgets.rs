pub mod button;
pub mod check_box;
pub mod dropdown;
pub mod label;
pub mod radio_button;
pub mod select_list;
pub mod slider;

pub use button::Button;
pub use check_box::CheckBox;
pub use dropdown::DropDown;
pub use label::Label;
pub use radio_button::RadioButton;
pub use select_list::SelectList;
pub use slider::Slider;
