use std::path::Path;

use super::{ShaderError, ShaderStage};

/// Shader text plus what it is for.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    /// Human-readable name used in diagnostics (the file name when loaded).
    pub label: String,
    pub stage: ShaderStage,
    pub text: String,
}

impl ShaderSource {
    pub fn new(label: impl Into<String>, stage: ShaderStage, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stage,
            text: text.into(),
        }
    }
}

/// Reads a WGSL source file as UTF-8 text.
pub fn load_shader_source(
    path: impl AsRef<Path>,
    stage: ShaderStage,
) -> Result<ShaderSource, ShaderError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ShaderError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    log::debug!("loaded {stage} shader `{label}` ({} bytes)", text.len());
    Ok(ShaderSource::new(label, stage, text))
}
