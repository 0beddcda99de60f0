use std::path::Path;

use crate::render::LineVertex;

use super::{
    compile, load_shader_source, validate, CompiledShader, ShaderError, ShaderSource, ShaderStage,
    ValidatedShader,
};

/// Vertex input locations the line vertex buffer provides.
pub const LINE_VERTEX_LOCATIONS: &[u32] = &[0];

/// Checks that a vertex and a fragment shader can be linked into a line
/// program.
///
/// - stages must be vertex then fragment
/// - every vertex input must be fed by the line vertex buffer
/// - every fragment input must be written by the vertex stage
pub fn check_interface(
    vertex: &ValidatedShader,
    fragment: &ValidatedShader,
) -> Result<(), ShaderError> {
    if vertex.stage != ShaderStage::Vertex || fragment.stage != ShaderStage::Fragment {
        return Err(link_failure(format!(
            "expected vertex + fragment, got {} `{}` + {} `{}`",
            vertex.stage, vertex.label, fragment.stage, fragment.label
        )));
    }

    if let Some(loc) = vertex
        .interface
        .inputs
        .iter()
        .find(|&&loc| !LINE_VERTEX_LOCATIONS.contains(&loc))
    {
        return Err(link_failure(format!(
            "`{}` reads @location({loc}) which the line vertex buffer does not provide",
            vertex.label
        )));
    }

    if let Some(loc) = fragment
        .interface
        .inputs
        .iter()
        .find(|&&loc| !vertex.interface.outputs.contains(&loc))
    {
        return Err(link_failure(format!(
            "`{}` reads @location({loc}) which `{}` never writes",
            fragment.label, vertex.label
        )));
    }

    Ok(())
}

fn link_failure(message: String) -> ShaderError {
    ShaderError::Link { message }.logged()
}

/// A vertex and a fragment source that validated and fit together.
///
/// Built without a GPU; [`ShaderProgram::from_sources`] turns it into a
/// pipeline.
#[derive(Debug, Clone)]
pub struct ProgramSources {
    vertex: ShaderSource,
    fragment: ShaderSource,
}

impl ProgramSources {
    /// Validates both sources and checks their interface.
    pub fn new(vertex: ShaderSource, fragment: ShaderSource) -> Result<Self, ShaderError> {
        check_interface(&validate(&vertex)?, &validate(&fragment)?)?;
        Ok(Self { vertex, fragment })
    }

    /// Reads the two files, then behaves like [`ProgramSources::new`].
    pub fn load(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex = load_shader_source(vertex_path, ShaderStage::Vertex)?;
        let fragment = load_shader_source(fragment_path, ShaderStage::Fragment)?;
        Self::new(vertex, fragment)
    }

    pub fn vertex(&self) -> &ShaderSource {
        &self.vertex
    }

    pub fn fragment(&self) -> &ShaderSource {
        &self.fragment
    }
}

/// Linked vertex + fragment pipeline for drawing line lists.
///
/// Owns the GPU pipeline; dropping the program releases it.
pub struct ShaderProgram {
    label: String,
    target_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Links two compiled shaders into a line-list pipeline targeting
    /// `surface_format`.
    pub fn link(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        vertex: &CompiledShader,
        fragment: &CompiledShader,
    ) -> Result<Self, ShaderError> {
        check_interface(vertex.signature(), fragment.signature())?;

        let label = format!("{}+{}", vertex.signature().label, fragment.signature().label);

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("wirecube line pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label.as_str()),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: vertex.module(),
                entry_point: Some(vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[LineVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: fragment.module(),
                entry_point: Some(fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::info!("linked shader program `{label}` for {surface_format:?}");
        Ok(Self {
            label,
            target_format: surface_format,
            pipeline,
        })
    }

    /// Compiles both sources into GPU modules and links them.
    pub fn from_sources(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sources: &ProgramSources,
    ) -> Result<Self, ShaderError> {
        let vertex = compile(device, &sources.vertex)?;
        let fragment = compile(device, &sources.fragment)?;
        Self::link(device, surface_format, &vertex, &fragment)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.target_format
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        log::debug!("releasing shader program `{}`", self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shader::StageInterface;

    const VERTEX: &str = include_str!("../../../../../res/shaders/vtx.wgsl");
    const FRAGMENT: &str = include_str!("../../../../../res/shaders/frag.wgsl");

    fn sig(label: &str, stage: ShaderStage, inputs: &[u32], outputs: &[u32]) -> ValidatedShader {
        ValidatedShader {
            label: label.into(),
            stage,
            entry_point: "main".into(),
            interface: StageInterface {
                inputs: inputs.to_vec(),
                outputs: outputs.to_vec(),
            },
        }
    }

    #[test]
    fn bundled_shaders_link() {
        let vertex = validate(&ShaderSource::new("vtx.wgsl", ShaderStage::Vertex, VERTEX)).unwrap();
        let fragment =
            validate(&ShaderSource::new("frag.wgsl", ShaderStage::Fragment, FRAGMENT)).unwrap();
        assert_eq!(check_interface(&vertex, &fragment), Ok(()));
    }

    #[test]
    fn program_sources_keep_both_stages() {
        let sources = ProgramSources::new(
            ShaderSource::new("vtx.wgsl", ShaderStage::Vertex, VERTEX),
            ShaderSource::new("frag.wgsl", ShaderStage::Fragment, FRAGMENT),
        )
        .unwrap();
        assert_eq!(sources.vertex().label, "vtx.wgsl");
        assert_eq!(sources.fragment().stage, ShaderStage::Fragment);
    }

    #[test]
    fn program_sources_reject_a_broken_stage() {
        let err = ProgramSources::new(
            ShaderSource::new("vtx.wgsl", ShaderStage::Vertex, VERTEX),
            ShaderSource::new("frag.wgsl", ShaderStage::Fragment, "@fragment fn fs_main( {"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Compile { stage: ShaderStage::Fragment, .. }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ProgramSources::load("no/such/vtx.wgsl", "no/such/frag.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::Io { .. }));
    }

    #[test]
    fn swapped_stages_fail() {
        let v = sig("v", ShaderStage::Vertex, &[0], &[]);
        let f = sig("f", ShaderStage::Fragment, &[], &[0]);
        assert!(matches!(check_interface(&f, &v), Err(ShaderError::Link { .. })));
    }

    #[test]
    fn vertex_input_not_in_buffer_fails() {
        let v = sig("v", ShaderStage::Vertex, &[0, 3], &[]);
        let f = sig("f", ShaderStage::Fragment, &[], &[0]);
        let err = check_interface(&v, &f).unwrap_err();
        assert!(err.to_string().contains("@location(3)"));
    }

    #[test]
    fn fragment_input_without_vertex_output_fails() {
        let v = sig("v", ShaderStage::Vertex, &[0], &[1]);
        let f = sig("f", ShaderStage::Fragment, &[1, 2], &[0]);
        let err = check_interface(&v, &f).unwrap_err();
        assert!(err.to_string().contains("@location(2)"));
    }

    #[test]
    fn matching_varyings_link() {
        let v = sig("v", ShaderStage::Vertex, &[0], &[1, 2]);
        let f = sig("f", ShaderStage::Fragment, &[2], &[0]);
        assert_eq!(check_interface(&v, &f), Ok(()));
    }
}
