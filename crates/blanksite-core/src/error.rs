//! Error taxonomy for a scaffolding run

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem operation that failed while materializing a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
    CreateDir,
    WriteFile,
    ReadDir,
}

impl fmt::Display for FsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            FsAction::CreateDir => "create directory",
            FsAction::WriteFile => "write file",
            FsAction::ReadDir => "read directory",
        };
        f.write_str(verb)
    }
}

/// Errors surfaced by the scaffolding pipeline.
///
/// None of these are recovered from locally; they propagate to the caller
/// and end the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user cancelled an interactive prompt or declined to continue
    #[error("setup cancelled")]
    PromptAborted,

    #[error("failed to {action}: {}", path.display())]
    FileSystem {
        action: FsAction,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template '{name}' could not be read from {}", path.display())]
    TemplateMissing {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dependency installation failed: {0}")]
    DependencyInstall(String),

    /// Terminal I/O failed while prompting or logging
    #[error("terminal I/O failed")]
    Console(#[from] io::Error),
}

impl ScaffoldError {
    pub(crate) fn fs(action: FsAction, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Map a prompt I/O error: an interrupted prompt means the user aborted.
    pub fn from_prompt(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            Self::PromptAborted
        } else {
            Self::Console(err)
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
