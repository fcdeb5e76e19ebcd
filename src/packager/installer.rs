//! Containerized dependency installation.
//!
//! Runs pip inside the official Lambda runtime image so installed packages
//! match the deployment environment's OS, architecture and Python version.
//! The install is constrained to binary wheels for the Lambda platform tag.

use super::PackagerConfig;
use crate::error::{CliError, PackagerError, Result};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Builds the container runtime arguments for the dependency install.
///
/// The working directory is mounted at `/var/task` (the Lambda task root)
/// and pip installs straight into the staging directory inside the mount.
/// The default entrypoint is overridden so the image runs a plain shell.
fn build_runtime_args(config: &PackagerConfig) -> Vec<String> {
    let task_mount = format!("{}:/var/task", config.working_dir.display());

    let pip_command = format!(
        "pip install --target /var/task/{staging} -r /var/task/{manifest} \
         --platform {platform} --only-binary=:all: --upgrade",
        staging = config.staging_dir,
        manifest = config.manifest,
        platform = config.pip_platform,
    );

    vec![
        "run".to_string(),
        "--rm".to_string(),
        "-v".to_string(),
        task_mount,
        "--platform".to_string(),
        config.container_platform.clone(),
        "--entrypoint".to_string(),
        String::new(),
        config.image.clone(),
        "/bin/sh".to_string(),
        "-c".to_string(),
        pip_command,
    ]
}

/// Installs the declared dependencies into the staging directory.
///
/// Verifies the container runtime is on PATH, then runs the install and
/// streams its output. There is no timeout: a hung container hangs the run.
/// A non-zero exit is fatal and aborts the packaging run.
pub async fn install(config: &PackagerConfig) -> Result<()> {
    which::which(&config.runtime_program).map_err(|_| {
        PackagerError::Cli(CliError::RuntimeNotFound {
            program: config.runtime_program.clone(),
        })
    })?;

    let runtime_args = build_runtime_args(config);
    let command_line = format!("{} {}", config.runtime_program, runtime_args.join(" "));

    let mut child = Command::new(&config.runtime_program)
        .args(&runtime_args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            PackagerError::Cli(CliError::ExecutionFailed {
                command: command_line.clone(),
                reason: e.to_string(),
            })
        })?;

    // Drain both streams before checking exit status so neither pipe
    // backs up and stalls the container
    let (_, stderr_lines) = tokio::join!(
        async {
            if let Some(stdout) = child.stdout.take() {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    println!("  {}", line);
                }
            }
        },
        async {
            let mut captured = Vec::new();
            if let Some(stderr) = child.stderr.take() {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    eprintln!("  {}", line);
                    captured.push(line);
                }
            }
            captured
        }
    );

    let status = child.wait().await.map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })
    })?;

    if !status.success() {
        let exit_code = status.code().unwrap_or(-1);
        let stderr_tail = stderr_lines
            .iter()
            .rev()
            .take(10)
            .rev()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        return Err(PackagerError::Cli(CliError::ExecutionFailed {
            command: command_line,
            reason: format!(
                "Dependency install exited with code {}.\n{}",
                exit_code, stderr_tail
            ),
        }));
    }

    Ok(())
}
