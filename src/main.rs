use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use compiler::{BuildError, ShaderBatchCompiler};

/// Compiles the GLSL vertex and fragment shaders of each directory into
/// SPIR-V with glslc, writing `<dir>/bin/<file>.spv`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Shader source directories, processed in order
    #[arg()]
    directories: Vec<PathBuf>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();
    let mut out = io::stdout();

    let mut shader_compiler = ShaderBatchCompiler::new();
    let report = match shader_compiler.run(args.directories.as_slice(), &mut out) {
        Ok(report) => report,
        Err(err) => match err.downcast_ref::<BuildError>() {
            Some(BuildError::Usage) => {
                writeln!(out, "Error: {}", err)?;
                return Ok(());
            }
            _ => return Err(err),
        },
    };

    writeln!(out, "{}", report)?;
    if !report.is_success() {
        bail!("{} shader(s) failed to compile", report.failures().count());
    }

    Ok(())
}
