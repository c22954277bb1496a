//! Post-install: npm and bower in the destination folder
//!
//! The two installs run strictly sequentially, streaming their output under
//! the progress log. A non-zero exit from either aborts the workflow.

use crate::error::ScaffoldError;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// The install commands, in the order they must run.
pub const INSTALL_COMMANDS: &[&str] = &["npm install", "bower install --allow-root"];

async fn run_install(command: &str, dir: &Path) -> Result<(), ScaffoldError> {
    let failed = |detail: String| ScaffoldError::InstallFailed {
        command: command.to_string(),
        dir: dir.to_path_buf(),
        detail,
    };

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| failed(format!("failed to spawn: {}", e)))?;

    let stdout = child.stdout.take().expect("stdout was piped");
    let stderr = child.stderr.take().expect("stderr was piped");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    loop {
        tokio::select! {
            line = stdout_reader.next_line() => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("  {}", format!("error reading output: {}", e).red());
                        break;
                    }
                }
            }
            line = stderr_reader.next_line() => {
                if let Ok(Some(line)) = line {
                    eprintln!("  {}", line.yellow());
                }
            }
        }
    }

    let status = child.wait().await.map_err(|e| failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(failed(format!(
            "exited with code {}",
            status.code().unwrap_or(-1)
        )))
    }
}

/// Run `npm install` then `bower install` in the destination.
pub async fn install_dependencies(dir: &Path) -> Result<(), ScaffoldError> {
    for command in INSTALL_COMMANDS {
        println!();
        println!("{} {}", "Running:".dimmed(), command.yellow());
        println!("{}", "This may take a couple of minutes.".dimmed());
        run_install(command, dir).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failing_command_reports_install_class() {
        let tmp = tempfile::tempdir().unwrap();
        let result = run_install("exit 7", tmp.path()).await;
        match result {
            Err(ScaffoldError::InstallFailed { detail, .. }) => {
                assert!(detail.contains('7'), "detail was: {}", detail);
            }
            other => panic!("expected InstallFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn succeeding_command_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(run_install("true", tmp.path()).await.is_ok());
    }
}
