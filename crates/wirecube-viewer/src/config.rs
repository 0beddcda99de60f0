use std::path::PathBuf;

use wirecube_engine::paint::Color;
use wirecube_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Constants of the cube projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// World-to-pixel magnification: one model unit is this many pixels.
    pub scale: f32,

    /// Pixels of cursor offset per radian of view angle.
    pub sensitivity: f32,

    /// Half the extent of each cross marker along both axes, in NDC units.
    pub marker_half_length: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            sensitivity: 100.0,
            marker_half_length: 0.05,
        }
    }
}

/// Vertex and fragment shader files, relative to the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("res/shaders/vtx.wgsl"),
            fragment: PathBuf::from("res/shaders/frag.wgsl"),
        }
    }
}

/// Everything the viewer can be tuned with.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,

    /// Initial window size in logical pixels.
    pub window_width: f64,
    pub window_height: f64,

    pub projection: ProjectionConfig,
    pub shaders: ShaderPaths,
    pub clear_color: Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "wirecube".to_string(),
            window_width: 640.0,
            window_height: 480.0,
            projection: ProjectionConfig::default(),
            shaders: ShaderPaths::default(),
            clear_color: Color::BLACK,
        }
    }
}

impl ViewerConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.window_width, self.window_height),
            ..RuntimeConfig::default()
        }
    }
}
