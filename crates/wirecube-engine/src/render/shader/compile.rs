use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{ShaderError, ShaderSource, ShaderStage};

/// Locations a stage consumes and produces through `@location(n)` bindings.
///
/// Builtins (`@builtin(position)` etc.) are not part of the interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageInterface {
    pub inputs: Vec<u32>,
    pub outputs: Vec<u32>,
}

/// A source that parsed and validated, reduced to what linking needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedShader {
    pub label: String,
    pub stage: ShaderStage,
    pub entry_point: String,
    pub interface: StageInterface,
}

/// A validated shader with its GPU module.
#[derive(Debug)]
pub struct CompiledShader {
    shader: ValidatedShader,
    module: wgpu::ShaderModule,
}

impl CompiledShader {
    pub fn signature(&self) -> &ValidatedShader {
        &self.shader
    }

    pub fn module(&self) -> &wgpu::ShaderModule {
        &self.module
    }

    pub fn entry_point(&self) -> &str {
        &self.shader.entry_point
    }
}

/// Parses and validates `source` without touching the GPU.
///
/// Failures are logged at `error` with the compiler's report and returned;
/// the logged text is the error's `Display`.
pub fn validate(source: &ShaderSource) -> Result<ValidatedShader, ShaderError> {
    let module = naga::front::wgsl::parse_str(&source.text)
        .map_err(|e| compile_failure(source, e.emit_to_string(&source.text)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| compile_failure(source, e.emit_to_string(&source.text)))?;

    let wanted = source.stage.to_naga();
    let mut candidates = module.entry_points.iter().filter(|ep| ep.stage == wanted);

    let Some(entry) = candidates.next() else {
        return Err(ShaderError::MissingEntryPoint {
            label: source.label.clone(),
            stage: source.stage,
        }
        .logged());
    };

    if let Some(extra) = candidates.next() {
        return Err(compile_failure(
            source,
            format!(
                "more than one {} entry point (`{}` and `{}`)",
                source.stage.attribute(),
                entry.name,
                extra.name
            ),
        ));
    }

    Ok(ValidatedShader {
        label: source.label.clone(),
        stage: source.stage,
        entry_point: entry.name.clone(),
        interface: interface_of(&module, entry),
    })
}

/// Validates `source` and creates its GPU shader module.
pub fn compile(
    device: &wgpu::Device,
    source: &ShaderSource,
) -> Result<CompiledShader, ShaderError> {
    let shader = validate(source)?;

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.label.as_str()),
        source: wgpu::ShaderSource::Wgsl(source.text.as_str().into()),
    });

    log::debug!(
        "compiled {} shader `{}` (entry `{}`)",
        shader.stage,
        shader.label,
        shader.entry_point
    );
    Ok(CompiledShader { shader, module })
}

fn compile_failure(source: &ShaderSource, diagnostic: String) -> ShaderError {
    ShaderError::Compile {
        label: source.label.clone(),
        stage: source.stage,
        diagnostic,
    }
    .logged()
}

fn interface_of(module: &naga::Module, entry: &naga::EntryPoint) -> StageInterface {
    let mut inputs = Vec::new();
    for arg in &entry.function.arguments {
        collect_locations(module, arg.ty, arg.binding.as_ref(), &mut inputs);
    }

    let mut outputs = Vec::new();
    if let Some(result) = &entry.function.result {
        collect_locations(module, result.ty, result.binding.as_ref(), &mut outputs);
    }

    inputs.sort_unstable();
    inputs.dedup();
    outputs.sort_unstable();
    outputs.dedup();
    StageInterface { inputs, outputs }
}

/// A binding-less argument or result is a struct whose members carry the
/// bindings.
fn collect_locations(
    module: &naga::Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    out: &mut Vec<u32>,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => out.push(*location),
        Some(_) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    if let Some(naga::Binding::Location { location, .. }) = &member.binding {
                        out.push(*location);
                    }
                }
            }
        }
    }
}
