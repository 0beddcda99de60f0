//! Colors used for clearing the surface.

pub mod color;

pub use color::Color;
