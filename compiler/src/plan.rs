use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::*;

use crate::config::CompilerConfig;
use crate::error::BuildError;
use crate::stage::ShaderStage;

/// One compiler invocation: `input` compiles into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTask {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stage: ShaderStage,
}

/// Everything that has to happen for a single source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    pub directory: PathBuf,
    pub output_directory: PathBuf,
    pub tasks: Vec<CompileTask>,
}

pub fn output_directory(directory: &Path, config: &CompilerConfig) -> PathBuf {
    directory.join(&config.output_directory)
}

/// `<dir>/<file>` compiles to `<dir>/bin/<file>.spv`.
pub fn artifact_path(source: &Path, config: &CompilerConfig) -> PathBuf {
    let directory = source.parent().unwrap_or_else(|| Path::new(""));
    let mut file_name = source.file_name().unwrap_or_default().to_os_string();
    file_name.push(".");
    file_name.push(&config.artifact_extension);
    output_directory(directory, config).join(file_name)
}

/// Builds the plan for `directory` from an already listed set of file names.
///
/// Names are filtered by extension and sorted, so the result does not depend
/// on the order the filesystem returned them in.
pub fn plan_directory<I, S>(directory: &Path, file_names: I, config: &CompilerConfig) -> DirectoryPlan
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut sources: Vec<(OsString, ShaderStage)> = file_names
        .into_iter()
        .filter_map(|name| {
            let name: &OsStr = name.as_ref();
            config.source_stage(name).map(|stage| (name.to_os_string(), stage))
        })
        .collect();
    sources.sort_by(|(a, _), (b, _)| a.cmp(b));

    let tasks = sources
        .into_iter()
        .map(|(name, stage)| {
            let input = directory.join(name);
            CompileTask {
                output: artifact_path(&input, config),
                input,
                stage,
            }
        })
        .collect();

    DirectoryPlan {
        directory: directory.to_path_buf(),
        output_directory: output_directory(directory, config),
        tasks,
    }
}

/// Lists every directory and plans its compilation. Reads only; nothing is
/// created and no process is started.
///
/// A directory that does not exist yet plans no tasks; its `bin` is still
/// created when the plan is executed.
pub fn plan_build<P: AsRef<Path>>(
    directories: &[P],
    config: &CompilerConfig,
) -> Result<Vec<DirectoryPlan>, BuildError> {
    if directories.is_empty() {
        return Err(BuildError::Usage);
    }

    let mut plans = Vec::with_capacity(directories.len());
    for directory in directories {
        let directory = directory.as_ref();
        let names = list_files(directory)?;
        let plan = plan_directory(directory, names, config);
        debug!(
            "Planned {} shader(s) in {}.",
            plan.tasks.len(),
            directory.display()
        );
        plans.push(plan);
    }
    Ok(plans)
}

fn list_files(directory: &Path) -> Result<Vec<OsString>, BuildError> {
    let read_error = |source: io::Error| BuildError::ReadDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("Shader source directory {} does not exist.", directory.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(read_error(err)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(read_error)?;
        if entry.file_type().map_err(read_error)?.is_dir() {
            continue;
        }
        names.push(entry.file_name());
    }
    Ok(names)
}
