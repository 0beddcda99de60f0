use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::shader::ShaderProgram;
use crate::render::{RenderCtx, RenderTarget};

/// One line endpoint in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 2],
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Smallest vertex buffer the renderer allocates.
const MIN_CAPACITY: usize = 64;

/// Queues line segments for a frame and draws them in one pass.
///
/// Vertices go into a single persistent vertex buffer that is overwritten
/// every frame and only reallocated when a frame needs more room. The CPU
/// staging vector is reused across frames as well.
#[derive(Default)]
pub struct LineRenderer {
    pending: Vec<LineVertex>,

    vbo: Option<wgpu::Buffer>,
    capacity: usize, // vertices

    warned_non_finite: bool,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a segment from `a` to `b`.
    ///
    /// Segments with a non-finite endpoint are dropped (one-time debug message).
    pub fn push_line(&mut self, a: Vec2, b: Vec2) {
        if !a.is_finite() || !b.is_finite() {
            if !self.warned_non_finite {
                log::debug!("LineRenderer: non-finite endpoint dropped ({a:?} -> {b:?})");
                self.warned_non_finite = true;
            }
            return;
        }
        self.pending.push(LineVertex { pos: a.to_array() });
        self.pending.push(LineVertex { pos: b.to_array() });
    }

    /// Number of segments queued for the next flush.
    pub fn pending_lines(&self) -> usize {
        self.pending.len() / 2
    }

    pub fn pending_vertices(&self) -> &[LineVertex] {
        &self.pending
    }

    /// Drops queued segments without drawing them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Uploads the queued segments and records one line-list draw with
    /// `program`. The queue is empty afterwards.
    pub fn flush(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        program: &ShaderProgram,
    ) {
        if self.pending.is_empty() {
            return;
        }

        if program.target_format() != ctx.surface_format {
            log::warn!(
                "LineRenderer: program `{}` targets {:?}, surface is {:?}; frame skipped",
                program.label(),
                program.target_format(),
                ctx.surface_format
            );
            self.pending.clear();
            return;
        }

        self.ensure_capacity(ctx, self.pending.len());
        let Some(vbo) = self.vbo.as_ref() else { return };

        let bytes: &[u8] = bytemuck::cast_slice(&self.pending);
        ctx.queue.write_buffer(vbo, 0, bytes);

        let vertex_count = self.pending.len() as u32;
        {
            let mut rpass = target.begin_load_pass("wirecube line pass");
            rpass.set_pipeline(program.pipeline());
            rpass.set_vertex_buffer(0, vbo.slice(..bytes.len() as u64));
            rpass.draw(0..vertex_count, 0..1);
        }

        self.pending.clear();
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        let current = if self.vbo.is_some() { self.capacity } else { 0 };
        let Some(new_cap) = grown_capacity(current, required) else { return };

        log::debug!("LineRenderer: vertex buffer capacity {current} -> {new_cap}");
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wirecube line vbo"),
            size: (new_cap * std::mem::size_of::<LineVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = new_cap;
    }
}

/// New capacity when `required` vertices do not fit in `current`.
fn grown_capacity(current: usize, required: usize) -> Option<usize> {
    if required <= current {
        return None;
    }
    Some(required.next_power_of_two().max(MIN_CAPACITY))
}
