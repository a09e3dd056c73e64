//! Rendering primitives shared by all modules

pub mod bar;
pub mod color;

pub use bar::render_bar;
pub use color::color;
