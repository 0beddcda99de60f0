mod app;
mod config;
mod cube;
mod projector;

use wirecube_engine::device::GpuConfig;
use wirecube_engine::logging::{init_logging, LoggingConfig};
use wirecube_engine::window::Runtime;

use crate::app::ViewerApp;
use crate::config::ViewerConfig;

/// Exit status when the window, GPU or shaders cannot be brought up.
const STARTUP_FAILURE: i32 = -1;

fn main() {
    init_logging(LoggingConfig::default());

    let config = ViewerConfig::default();
    log::info!(
        "starting {}x{} viewer (scale {}, sensitivity {})",
        config.window_width,
        config.window_height,
        config.projection.scale,
        config.projection.sensitivity
    );

    let runtime = config.runtime_config();
    if let Err(err) = Runtime::run(runtime, GpuConfig::default(), ViewerApp::new(config)) {
        log::error!("{err:#}");
        std::process::exit(STARTUP_FAILURE);
    }
}
