//! Shader loading, compilation and linking.
//!
//! Pipeline: [`load_shader_source`] reads WGSL text from disk,
//! [`compile`] validates it on the CPU and creates the GPU module, and
//! [`ShaderProgram::link`] checks the vertex/fragment interface before
//! building the line pipeline. [`ProgramSources`] runs the CPU half of that
//! (load, validate, interface check) so it can fail before a device exists. Every step reports failure as a
//! [`ShaderError`] carrying the diagnostic text.

mod compile;
mod error;
mod program;
mod source;

pub use compile::{compile, validate, CompiledShader, StageInterface, ValidatedShader};
pub use error::{ShaderError, ShaderStage};
pub use program::{check_interface, ProgramSources, ShaderProgram, LINE_VERTEX_LOCATIONS};
pub use source::{load_shader_source, ShaderSource};
