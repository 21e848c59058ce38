//! Template files compiled into the binary.
//!
//! The `include_str!` paths are relative to this file; a template added to
//! `templates/aspnet/` also needs an arm here and a `TemplateId` variant.

use super::TemplateId;

const STARTUP: &str = include_str!("../../templates/aspnet/Startup.cs");
const PACKAGE_JSON: &str = include_str!("../../templates/aspnet/package.json");
const PROJECT_JSON: &str = include_str!("../../templates/aspnet/project.json");
const GITIGNORE: &str = include_str!("../../templates/aspnet/gitignore");
const HOME_CONTROLLER: &str = include_str!("../../templates/aspnet/HomeController.cs");
const VIEW_START: &str = include_str!("../../templates/aspnet/_ViewStart.cshtml");
const WEB_CONFIG: &str = include_str!("../../templates/aspnet/web.config");
const GULPFILE: &str = include_str!("../../templates/aspnet/gulpfile.js");
const LAYOUT: &str = include_str!("../../templates/aspnet/_Layout.cshtml");
const LAYOUT_BOOTSTRAP: &str = include_str!("../../templates/aspnet/_Layout_bootstrap.cshtml");
const INDEX: &str = include_str!("../../templates/aspnet/Index.cshtml");
const INDEX_BOOTSTRAP: &str = include_str!("../../templates/aspnet/Index_bootstrap.cshtml");
const DOCKERFILE: &str = include_str!("../../templates/aspnet/Dockerfile");

pub(super) fn contents(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Startup => STARTUP,
        TemplateId::PackageJson => PACKAGE_JSON,
        TemplateId::ProjectJson => PROJECT_JSON,
        TemplateId::GitIgnore => GITIGNORE,
        TemplateId::HomeController => HOME_CONTROLLER,
        TemplateId::ViewStart => VIEW_START,
        TemplateId::WebConfig => WEB_CONFIG,
        TemplateId::Gulpfile => GULPFILE,
        TemplateId::Layout => LAYOUT,
        TemplateId::LayoutBootstrap => LAYOUT_BOOTSTRAP,
        TemplateId::Index => INDEX,
        TemplateId::IndexBootstrap => INDEX_BOOTSTRAP,
        TemplateId::Dockerfile => DOCKERFILE,
    }
}
