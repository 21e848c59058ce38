//! Installing the generated project's dependencies
//!
//! This module provides:
//! - The `DependencyInstaller` seam used by the scaffold pipeline
//! - An npm-backed installer that streams the tool's output

pub mod npm;

use crate::error::Result;
use std::path::Path;

pub use npm::NpmInstaller;

/// Installs dependencies inside a freshly generated project
#[allow(async_fn_in_trait)]
pub trait DependencyInstaller {
    /// Command shown to the user before installing
    fn describe(&self) -> String;

    /// Run the installation in `project_root` and wait for it to finish
    async fn install(&self, project_root: &Path) -> Result<()>;
}
