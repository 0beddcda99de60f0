use anyhow::Context;

use wirecube_engine::core::{App, AppControl, FrameCtx};
use wirecube_engine::device::Gpu;
use wirecube_engine::input::PointerState;
use wirecube_engine::render::shader::{ProgramSources, ShaderProgram};
use wirecube_engine::render::LineRenderer;

use crate::config::{ShaderPaths, ViewerConfig};
use crate::projector::CubeProjector;

const SHADER_SETUP: &str = "failed to build the line shader program";

/// GPU-side state built once the device exists and dropped with the app.
struct RenderResources {
    program: ShaderProgram,
    lines: LineRenderer,
}

/// Draws the cube's projected points every frame.
pub struct ViewerApp {
    config: ViewerConfig,
    projector: CubeProjector,
    resources: Option<RenderResources>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        let projector = CubeProjector::new(config.projection);
        Self {
            config,
            projector,
            resources: None,
        }
    }
}

/// Reads and checks both shader files. Needs no GPU.
fn load_shader_sources(paths: &ShaderPaths) -> anyhow::Result<ProgramSources> {
    ProgramSources::load(&paths.vertex, &paths.fragment).context(SHADER_SETUP)
}

/// Replaces whatever is queued in `lines` with this frame's markers.
///
/// Segments left over from a frame that never flushed are dropped.
fn queue_markers(projector: &CubeProjector, pointer: &PointerState, lines: &mut LineRenderer) {
    lines.clear();
    projector.draw(pointer, lines);
}

impl App for ViewerApp {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        let sources = load_shader_sources(&self.config.shaders)?;
        log::info!(
            "shaders `{}` + `{}` validated",
            sources.vertex().label,
            sources.fragment().label
        );

        let program = ShaderProgram::from_sources(gpu.device(), gpu.surface_format(), &sources)
            .context(SHADER_SETUP)?;

        log::info!("projecting {} model points", self.projector.points().len());
        self.resources = Some(RenderResources {
            program,
            lines: LineRenderer::new(),
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(RenderResources { program, lines }) = self.resources.as_mut() else {
            log::error!("frame requested before GPU resources exist");
            return AppControl::Exit;
        };

        let projector = &self.projector;
        let pointer = ctx.pointer;
        ctx.render(self.config.clear_color, |rctx, target| {
            queue_markers(projector, &pointer, lines);
            lines.flush(rctx, target, program);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use wirecube_engine::coords::{Vec2, Viewport};
    use wirecube_engine::render::shader::ShaderError;

    use super::*;
    use crate::config::ProjectionConfig;

    fn pointer_at(x: f32, y: f32) -> PointerState {
        PointerState::new(Vec2::new(x, y), Viewport::new(640.0, 480.0))
    }

    fn bundled(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../res/shaders")
            .join(name)
    }

    /// Writes `text` to a fresh file under the system temp dir.
    fn temp_shader(name: &str, text: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wirecube-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    // ── frame batching ────────────────────────────────────────────────────

    #[test]
    fn unflushed_frame_does_not_leak_into_the_next() {
        let projector = CubeProjector::new(ProjectionConfig::default());
        let mut lines = LineRenderer::new();

        // First frame queues its markers but its surface is never acquired.
        queue_markers(&projector, &pointer_at(100.0, 50.0), &mut lines);
        queue_markers(&projector, &pointer_at(400.0, 300.0), &mut lines);
        assert_eq!(lines.pending_lines(), 18);

        let mut fresh = LineRenderer::new();
        projector.draw(&pointer_at(400.0, 300.0), &mut fresh);
        assert_eq!(lines.pending_vertices(), fresh.pending_vertices());
    }

    #[test]
    fn repeated_skips_keep_the_batch_bounded() {
        let projector = CubeProjector::new(ProjectionConfig::default());
        let mut lines = LineRenderer::new();
        for i in 0..10 {
            queue_markers(&projector, &pointer_at(i as f32 * 30.0, 240.0), &mut lines);
        }
        assert_eq!(lines.pending_lines(), 18);
    }

    // ── shader setup ──────────────────────────────────────────────────────

    #[test]
    fn bundled_shader_files_load() {
        let paths = ShaderPaths {
            vertex: bundled("vtx.wgsl"),
            fragment: bundled("frag.wgsl"),
        };
        let sources = load_shader_sources(&paths).unwrap();
        assert_eq!(sources.vertex().label, "vtx.wgsl");
        assert_eq!(sources.fragment().label, "frag.wgsl");
    }

    #[test]
    fn invalid_shader_file_fails_with_its_diagnostic() {
        let paths = ShaderPaths {
            vertex: temp_shader(
                "broken_vtx.wgsl",
                "@vertex fn vs_main(@location(0) p: vec2<f32> -> @builtin(position) vec4<f32> {}",
            ),
            fragment: bundled("frag.wgsl"),
        };
        let err = load_shader_sources(&paths).unwrap_err();

        let chain = format!("{err:#}");
        assert!(chain.starts_with(SHADER_SETUP));
        assert!(chain.contains("failed to compile vertex shader `broken_vtx.wgsl`"));

        match err.downcast_ref::<ShaderError>() {
            Some(ShaderError::Compile { label, diagnostic, .. }) => {
                assert_eq!(label, "broken_vtx.wgsl");
                assert!(diagnostic.contains("@vertex fn vs_main("));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_shader_file_names_the_path() {
        let paths = ShaderPaths {
            vertex: PathBuf::from("does/not/exist.wgsl"),
            fragment: bundled("frag.wgsl"),
        };
        let chain = format!("{:#}", load_shader_sources(&paths).unwrap_err());
        assert!(chain.contains("does/not/exist.wgsl"));
    }
}
