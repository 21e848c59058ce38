//! Template selection, loading, rendering, and copying
//!
//! This module provides:
//! - The fixed template set (`TemplateId`) and its embedded contents
//! - Template plans chosen from the scaffold options
//! - Template sources (embedded or a local override directory)
//! - `{{placeholder}}` rendering
//! - Copying a rendered plan into the project directory

pub mod copier;
mod embedded;
pub mod plan;
pub mod render;
pub mod source;

pub use copier::copy_plan;
pub use plan::{PlannedFile, TemplatePlan};
pub use render::RenderContext;
pub use source::TemplateSource;

/// Every template the generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Startup,
    PackageJson,
    ProjectJson,
    GitIgnore,
    HomeController,
    ViewStart,
    WebConfig,
    Gulpfile,
    Layout,
    LayoutBootstrap,
    Index,
    IndexBootstrap,
    Dockerfile,
}

impl TemplateId {
    pub const ALL: [TemplateId; 13] = [
        TemplateId::Startup,
        TemplateId::PackageJson,
        TemplateId::ProjectJson,
        TemplateId::GitIgnore,
        TemplateId::HomeController,
        TemplateId::ViewStart,
        TemplateId::WebConfig,
        TemplateId::Gulpfile,
        TemplateId::Layout,
        TemplateId::LayoutBootstrap,
        TemplateId::Index,
        TemplateId::IndexBootstrap,
        TemplateId::Dockerfile,
    ];

    /// File name of the template inside a template directory
    pub fn source_name(&self) -> &'static str {
        match self {
            TemplateId::Startup => "Startup.cs",
            TemplateId::PackageJson => "package.json",
            TemplateId::ProjectJson => "project.json",
            // Stored without the dot so packaging tools don't treat it as an ignore file
            TemplateId::GitIgnore => "gitignore",
            TemplateId::HomeController => "HomeController.cs",
            TemplateId::ViewStart => "_ViewStart.cshtml",
            TemplateId::WebConfig => "web.config",
            TemplateId::Gulpfile => "gulpfile.js",
            TemplateId::Layout => "_Layout.cshtml",
            TemplateId::LayoutBootstrap => "_Layout_bootstrap.cshtml",
            TemplateId::Index => "Index.cshtml",
            TemplateId::IndexBootstrap => "Index_bootstrap.cshtml",
            TemplateId::Dockerfile => "Dockerfile",
        }
    }

    /// Path of the generated file, relative to the project root
    pub fn destination(&self) -> &'static str {
        match self {
            TemplateId::Startup => "Startup.cs",
            TemplateId::PackageJson => "package.json",
            TemplateId::ProjectJson => "project.json",
            TemplateId::GitIgnore => ".gitignore",
            TemplateId::HomeController => "Controllers/HomeController.cs",
            TemplateId::ViewStart => "Views/_ViewStart.cshtml",
            TemplateId::WebConfig => "wwwroot/web.config",
            TemplateId::Gulpfile => "gulpfile.js",
            TemplateId::Layout | TemplateId::LayoutBootstrap => "Views/Shared/_Layout.cshtml",
            TemplateId::Index | TemplateId::IndexBootstrap => "Views/Home/Index.cshtml",
            TemplateId::Dockerfile => "Dockerfile",
        }
    }

    /// Template contents compiled into the binary
    pub fn embedded(&self) -> &'static str {
        embedded::contents(*self)
    }
}
