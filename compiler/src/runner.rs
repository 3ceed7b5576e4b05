use std::ffi::OsString;
use std::fmt;
use std::process::{Command, ExitStatus};

use log::*;

use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::plan::CompileTask;

/// A fully built compiler command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl CompileCommand {
    /// `<program> -c <input> -o <output>`
    pub fn for_task(task: &CompileTask, config: &CompilerConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: vec![
                OsString::from(&config.compile_flag),
                task.input.clone().into_os_string(),
                OsString::from(&config.output_flag),
                task.output.clone().into_os_string(),
            ],
        }
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit code and captured output of a compiler process that succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub trait CommandRunner {
    fn run(&mut self, command: &CompileCommand) -> Result<CompilerOutput, CompileError>;
}

/// Runs commands as child processes and waits for each one to exit.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command: &CompileCommand) -> Result<CompilerOutput, CompileError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .map_err(|source| CompileError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        check_status(output.status, stdout, stderr)
    }
}

fn check_status(
    status: ExitStatus,
    stdout: String,
    stderr: String,
) -> Result<CompilerOutput, CompileError> {
    if !status.success() {
        return Err(CompileError::Failed {
            status,
            stdout,
            stderr: stderr.trim_end().to_owned(),
        });
    }

    if !stderr.is_empty() {
        // glslc reports warnings on stderr and still exits 0.
        warn!("{}", stderr.trim_end());
    }
    Ok(CompilerOutput {
        code: status.code(),
        stdout,
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::stage::ShaderStage;

    fn task() -> CompileTask {
        CompileTask {
            input: PathBuf::from("shaders/triangle.vert"),
            output: PathBuf::from("shaders/bin/triangle.vert.spv"),
            stage: ShaderStage::Vertex,
        }
    }

    #[test]
    fn command_line_matches_glslc_invocation() {
        let command = CompileCommand::for_task(&task(), &CompilerConfig::default());
        assert_eq!(command.program, "glslc");
        assert_eq!(
            command.to_string(),
            "glslc -c shaders/triangle.vert -o shaders/bin/triangle.vert.spv"
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let config = CompilerConfig::default().with_program("no-such-shader-compiler-on-path");
        let command = CompileCommand::for_task(&task(), &config);
        let err = ProcessRunner.run(&command).unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
        assert_eq!(err.exit_code(), None);
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_success() {
        let ok = CompileCommand::for_task(&task(), &CompilerConfig::default().with_program("true"));
        assert_eq!(ProcessRunner.run(&ok).unwrap().code, Some(0));

        let failing =
            CompileCommand::for_task(&task(), &CompilerConfig::default().with_program("false"));
        let err = ProcessRunner.run(&failing).unwrap_err();
        assert_eq!(err.exit_code(), Some(1));
    }

    #[cfg(unix)]
    #[test]
    fn failure_keeps_everything_the_compiler_printed() {
        use std::os::unix::process::ExitStatusExt;

        let err = check_status(
            ExitStatus::from_raw(3 << 8),
            "1 error generated.\n".to_owned(),
            "triangle.vert:4: error: 'foo' : undeclared identifier\n".to_owned(),
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), Some(3));
        match err {
            CompileError::Failed { stdout, stderr, .. } => {
                assert_eq!(stdout, "1 error generated.\n");
                assert_eq!(stderr, "triangle.vert:4: error: 'foo' : undeclared identifier");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn success_keeps_stdout_and_warnings() {
        use std::os::unix::process::ExitStatusExt;

        let output = check_status(
            ExitStatus::from_raw(0),
            "done\n".to_owned(),
            "warning: version 450 is unknown\n".to_owned(),
        )
        .unwrap();

        assert_eq!(output.code, Some(0));
        assert_eq!(output.stdout, "done\n");
        assert_eq!(output.stderr, "warning: version 450 is unknown\n");
    }
}
