//! Wirecube engine crate.
//!
//! Window, GPU and line-drawing plumbing for the wirecube viewer. The viewer
//! owns what gets drawn; this crate owns how it reaches the screen.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
