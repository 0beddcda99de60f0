//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window and GPU; the application receives one
//! `on_gpu_ready` call at startup and one `on_frame` call per redraw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_viewport;
