pub mod step;

pub use step::NavContext;
