//! Generator configuration
//!
//! Collects the constants that shape a run: product identity, prompt
//! defaults, where templates come from and which tool installs dependencies.

use crate::templates::TemplateSource;
use std::path::PathBuf;

/// Environment variable that points the generator at a local template directory
pub const TEMPLATE_DIR_ENV: &str = "BLANKSITE_TEMPLATE_DIR";

/// Configuration for a scaffolding run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Human-readable product name shown in the intro banner
    pub display_name: &'static str,

    /// Default answer for the application name prompt
    pub default_app_name: &'static str,

    /// Program used to install the generated project's dependencies
    pub install_program: &'static str,

    /// Where to read the prerequisites of the generated project
    pub docs_url: &'static str,

    /// Port the generated site listens on
    pub web_port: u16,

    /// Source of the template files
    pub template_source: TemplateSource,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            display_name: "ASP.NET Blank Site",
            default_app_name: "Blank Site",
            install_program: "npm",
            docs_url: "https://github.com/aspnet/home",
            web_port: 5000,
            template_source: TemplateSource::Embedded,
        }
    }
}

impl GeneratorConfig {
    /// Build the configuration, letting an explicit template directory win
    /// over the `BLANKSITE_TEMPLATE_DIR` environment variable.
    pub fn from_env(template_dir: Option<PathBuf>) -> Self {
        let template_dir = template_dir.or_else(|| {
            std::env::var_os(TEMPLATE_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        Self {
            template_source: template_dir.map_or(TemplateSource::Embedded, TemplateSource::Local),
            ..Self::default()
        }
    }

    /// Local URL of the running site
    pub fn site_url(&self) -> String {
        format!("http://localhost:{}", self.web_port)
    }
}
