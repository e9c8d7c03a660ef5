mod app;
mod keyboard;
mod render;
mod scene;
pub mod theme;

pub use app::DemoApp;
