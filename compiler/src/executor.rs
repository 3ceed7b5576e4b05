use std::fs;
use std::io::{self, Write};

use log::*;

use crate::config::CompilerConfig;
use crate::error::{BuildError, CompileError};
use crate::plan::DirectoryPlan;
use crate::report::{BatchReport, CompileOutcome};
use crate::runner::{CommandRunner, CompileCommand};

/// Runs every planned task, one directory and one file at a time, writing
/// progress to `out`.
///
/// A failed task is logged and recorded; it never stops the batch. If a
/// directory's `bin` cannot be created, each of its tasks is recorded as
/// failed without running the compiler. Only a failure to write progress
/// ends the batch early.
pub fn execute<R: CommandRunner, W: Write>(
    plans: &[DirectoryPlan],
    config: &CompilerConfig,
    runner: &mut R,
    out: &mut W,
) -> io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for plan in plans {
        writeln!(out, "building shader source directory: {}", plan.directory.display())?;

        let output_ready = match create_output_directory(plan) {
            Ok(()) => true,
            Err(err) => {
                error!("{}", err);
                false
            }
        };

        for task in &plan.tasks {
            let command = CompileCommand::for_task(task, config);
            writeln!(out, "  Building Shader: {}", task.output.display())?;

            let result = if output_ready {
                writeln!(out, "    running command: {}", command)?;
                runner.run(&command)
            } else {
                Err(CompileError::OutputDirectoryUnavailable(
                    plan.output_directory.clone(),
                ))
            };

            match &result {
                Ok(output) => {
                    debug!("Compiled {} shader {}.", task.stage, task.input.display());
                    if !output.stdout.trim().is_empty() {
                        debug!("{}", output.stdout.trim_end());
                    }
                }
                Err(err) => warn!("Failed to compile {}: {}", task.input.display(), err),
            }

            report.push(CompileOutcome {
                task: task.clone(),
                command,
                result,
            });
        }
    }

    Ok(report)
}

fn create_output_directory(plan: &DirectoryPlan) -> Result<(), BuildError> {
    fs::create_dir_all(&plan.output_directory).map_err(|source| BuildError::OutputDirectory {
        path: plan.output_directory.clone(),
        source,
    })?;
    debug!("Output directory {} ready.", plan.output_directory.display());
    Ok(())
}
