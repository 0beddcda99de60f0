//! Input subsystem.
//!
//! The only input the viewer consumes is the cursor position. The runtime
//! translates winit cursor events into a [`PointerTracker`] and hands the
//! application a [`PointerState`] snapshot every frame.

mod pointer;

pub use pointer::{PointerState, PointerTracker};
