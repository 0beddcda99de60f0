use std::fmt;
use std::path::PathBuf;

/// Programmable pipeline stage a shader source is written for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }

    /// WGSL attribute marking an entry point of this stage.
    pub fn attribute(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "@vertex",
            ShaderStage::Fragment => "@fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failure while loading, compiling or linking shaders.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The source file could not be read.
    Io { path: PathBuf, message: String },

    /// The source did not parse or validate. `diagnostic` is the full
    /// compiler report, source excerpt included.
    Compile {
        label: String,
        stage: ShaderStage,
        diagnostic: String,
    },

    /// The source has no entry point for its stage.
    MissingEntryPoint { label: String, stage: ShaderStage },

    /// The vertex and fragment stages do not fit together.
    Link { message: String },
}

impl ShaderError {
    /// Logs the error at `error` level, as displayed, and hands it back.
    pub(crate) fn logged(self) -> Self {
        log::error!("{self}");
        self
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Io { path, message } => {
                write!(f, "failed to read shader `{}`: {message}", path.display())
            }
            ShaderError::Compile {
                label,
                stage,
                diagnostic,
            } => write!(f, "failed to compile {stage} shader `{label}`:\n{diagnostic}"),
            ShaderError::MissingEntryPoint { label, stage } => write!(
                f,
                "{stage} shader `{label}` has no {} entry point",
                stage.attribute()
            ),
            ShaderError::Link { message } => write!(f, "failed to link shader program: {message}"),
        }
    }
}

impl std::error::Error for ShaderError {}
