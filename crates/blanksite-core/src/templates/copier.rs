//! Writing a rendered template plan to disk

use crate::error::{FsAction, Result, ScaffoldError};
use crate::templates::plan::TemplatePlan;
use crate::templates::render::RenderContext;
use crate::templates::source::TemplateSource;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Render every planned template into `target_dir`, in plan order.
///
/// Stops at the first failure; files written before it are left in place.
/// Returns the written paths relative to `target_dir`.
pub async fn copy_plan(
    source: &TemplateSource,
    plan: &TemplatePlan,
    context: &RenderContext,
    target_dir: &Path,
) -> Result<Vec<PathBuf>> {
    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .map_err(|e| ScaffoldError::fs(FsAction::CreateDir, target_dir, e))?;

    let mut copied_files = Vec::with_capacity(plan.len());

    for file in plan.files() {
        let target_path = target_dir.join(&file.destination);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::fs(FsAction::CreateDir, parent, e))?;
        }

        let template = source.load(file.template).await?;
        fs::write(&target_path, context.render(&template))
            .await
            .map_err(|e| ScaffoldError::fs(FsAction::WriteFile, &target_path, e))?;

        copied_files.push(file.destination.clone());
    }

    Ok(copied_files)
}
