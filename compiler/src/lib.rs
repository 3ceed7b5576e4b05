use std::io::Write;
use std::path::Path;

use anyhow::{Ok, Result};
use log::*;

pub mod config;
pub mod error;
pub mod executor;
pub mod plan;
pub mod report;
pub mod runner;
pub mod stage;

pub use config::CompilerConfig;
pub use error::{BuildError, CompileError};
pub use executor::execute;
pub use plan::{artifact_path, plan_build, plan_directory, CompileTask, DirectoryPlan};
pub use report::{BatchReport, CompileOutcome};
pub use runner::{CommandRunner, CompileCommand, CompilerOutput, ProcessRunner};
pub use stage::ShaderStage;

/// Compiles every `.vert`/`.frag` file of a set of directories into
/// `<dir>/bin/<file>.spv`.
#[derive(Debug)]
pub struct ShaderBatchCompiler<R = ProcessRunner> {
    config: CompilerConfig,
    runner: R,
}

impl ShaderBatchCompiler {
    pub fn new() -> ShaderBatchCompiler {
        ShaderBatchCompiler::with_config(CompilerConfig::default())
    }

    pub fn with_config(config: CompilerConfig) -> ShaderBatchCompiler {
        ShaderBatchCompiler::with_runner(config, ProcessRunner)
    }
}

impl Default for ShaderBatchCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ShaderBatchCompiler<R> {
    pub fn with_runner(config: CompilerConfig, runner: R) -> ShaderBatchCompiler<R> {
        ShaderBatchCompiler { config, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Plans the whole batch up front, then compiles it, writing progress to
    /// `out`.
    ///
    /// Fails with [`BuildError::Usage`] when `directories` is empty and with
    /// [`BuildError::ReadDirectory`] when an existing one cannot be listed; in
    /// both cases nothing has been written yet. Compiler failures do not fail
    /// the run, they are in the returned report.
    pub fn run<P: AsRef<Path>, W: Write>(
        &mut self,
        directories: &[P],
        out: &mut W,
    ) -> Result<BatchReport> {
        let plans = plan_build(directories, &self.config)?;
        info!(
            "Compiling {} shader(s) from {} director{}.",
            plans.iter().map(|p| p.tasks.len()).sum::<usize>(),
            plans.len(),
            if plans.len() == 1 { "y" } else { "ies" }
        );

        let report = execute(&plans, &self.config, &mut self.runner, out)?;
        Ok(report)
    }
}
