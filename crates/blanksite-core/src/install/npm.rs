//! npm-backed dependency installation
//!
//! Runs the install command inside the project directory and streams its
//! output line by line while waiting for it to exit.

use super::DependencyInstaller;
use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Installer that shells out to a package manager (`npm install` by default)
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    args: Vec<String>,
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new("npm", ["install"])
    }
}

impl NpmInstaller {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Installer for a configured program, always running `<program> install`
    pub fn for_program(program: &str) -> Self {
        Self::new(program, ["install"])
    }
}

impl DependencyInstaller for NpmInstaller {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    async fn install(&self, project_root: &Path) -> Result<()> {
        let cmd = self.describe();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    ScaffoldError::DependencyInstall(format!(
                        "'{}' was not found on PATH; install it or re-run with --skip-install",
                        self.program
                    ))
                } else {
                    ScaffoldError::DependencyInstall(format!("failed to start '{}': {}", cmd, e))
                }
            })?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(ScaffoldError::DependencyInstall(
                "failed to capture installer output".to_string(),
            ));
        };

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_done = false;
        let mut stderr_done = false;

        while !(stdout_done && stderr_done) {
            tokio::select! {
                line = stdout_reader.next_line(), if !stdout_done => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_done = true;
                        }
                    }
                }
                line = stderr_reader.next_line(), if !stderr_done => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_done = true;
                        }
                    }
                }
            }
        }

        let status = child.wait().await.map_err(|e| {
            ScaffoldError::DependencyInstall(format!("failed to wait for '{}': {}", cmd, e))
        })?;
        println!();

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::DependencyInstall(format!(
                "'{}' exited with code {}",
                cmd,
                status.code().unwrap_or(-1)
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        assert_eq!(NpmInstaller::default().describe(), "npm install");
        assert_eq!(NpmInstaller::for_program("pnpm").describe(), "pnpm install");
    }

    #[tokio::test]
    async fn test_missing_program_is_install_error() {
        let dir = tempfile::tempdir().unwrap();
        let installer = NpmInstaller::new("blanksite-no-such-installer", ["install"]);

        let err = installer.install(dir.path()).await.unwrap_err();
        match err {
            ScaffoldError::DependencyInstall(msg) => assert!(msg.contains("not found on PATH")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_in_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let installer = NpmInstaller::new("sh", ["-c", "echo installed > marker.txt"]);

        installer.install(dir.path()).await.unwrap();
        let marker = std::fs::read_to_string(dir.path().join("marker.txt")).unwrap();
        assert_eq!(marker.trim(), "installed");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_install_error() {
        let dir = tempfile::tempdir().unwrap();
        let installer = NpmInstaller::new("sh", ["-c", "echo oops >&2; exit 3"]);

        let err = installer.install(dir.path()).await.unwrap_err();
        match err {
            ScaffoldError::DependencyInstall(msg) => assert!(msg.contains("exited with code 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
