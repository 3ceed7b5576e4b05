use std::ffi::OsStr;

use crate::stage::ShaderStage;

pub const GLSLC: &str = "glslc";
pub const COMPILE_ONLY_FLAG: &str = "-c";
pub const OUTPUT_FLAG: &str = "-o";
pub const OUTPUT_DIRECTORY: &str = "bin";
pub const ARTIFACT_EXTENSION: &str = "spv";

/// How the external compiler is invoked and where its artifacts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    pub program: String,
    pub compile_flag: String,
    pub output_flag: String,
    pub output_directory: String,
    pub artifact_extension: String,
    pub stages: Vec<ShaderStage>,
}

impl CompilerConfig {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Stage of `file_name` if it is a source this configuration compiles.
    pub fn source_stage(&self, file_name: &OsStr) -> Option<ShaderStage> {
        ShaderStage::from_file_name(file_name).filter(|stage| self.stages.contains(stage))
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: GLSLC.to_owned(),
            compile_flag: COMPILE_ONLY_FLAG.to_owned(),
            output_flag: OUTPUT_FLAG.to_owned(),
            output_directory: OUTPUT_DIRECTORY.to_owned(),
            artifact_extension: ARTIFACT_EXTENSION.to_owned(),
            stages: ShaderStage::ALL.to_vec(),
        }
    }
}
