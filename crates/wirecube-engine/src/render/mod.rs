//! GPU rendering subsystem.
//!
//! Everything drawn is a line segment whose endpoints are already in
//! normalized device coordinates. Shaders are loaded from disk, validated on
//! the CPU, and linked into a [`shader::ShaderProgram`] that the
//! [`LineRenderer`] draws with.

pub mod cross;
mod ctx;
pub mod line;
pub mod shader;

pub use cross::{cross_segments, draw_cross};
pub use ctx::{RenderCtx, RenderTarget};
pub use line::{LineRenderer, LineVertex};
