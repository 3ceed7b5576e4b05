use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn shader_batch(args: &[&std::path::Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shader-batch"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_directories_prints_usage_and_exits_cleanly() {
    let output = shader_batch(&[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Error: at least the first argument should be a path to shader files\n"
    );
}

#[test]
fn directory_without_shaders_succeeds() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let output = shader_batch(&[dir.path()]);

    assert!(output.status.success());
    assert!(dir.path().join("bin").is_dir());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("building shader source directory: "));
    assert!(stdout.ends_with("compiled 0 shader(s), 0 failed\n"));
}

#[test]
fn failed_compilation_exits_non_zero() {
    // Rejected by glslc, and reported as a spawn failure when glslc is absent.
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.frag"), "this is not glsl\n").unwrap();

    let output = shader_batch(&[dir.path()]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  Building Shader: "));
    assert!(stdout.contains("compiled 0 shader(s), 1 failed"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 shader(s) failed to compile"));
}
