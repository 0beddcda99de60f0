//! Coordinate types shared by the runtime, renderers and the viewer.
//!
//! Two spaces are in play:
//! - window space: logical pixels, origin top-left, +X right, +Y down
//! - normalized device space: each axis in [-1, 1], origin at the centre
//!
//! [`Viewport::to_ndc`] is the only conversion between them.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
