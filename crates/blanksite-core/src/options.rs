//! Options collected from the user and the values derived from them

use crate::symbol::symbolize;
use serde::Deserialize;
use std::path::{Component, Path};

/// Answers to the interactive questions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Answers {
    #[serde(alias = "appname")]
    pub app_name: String,

    #[serde(default)]
    pub use_gulp: bool,

    #[serde(default, alias = "bootstrap")]
    pub use_bootstrap: bool,
}

/// Everything that decides what gets generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub app_name: String,
    pub use_gulp: bool,
    pub use_bootstrap: bool,
    pub use_docker: bool,
}

impl ScaffoldOptions {
    /// Combine prompt answers with the `--docker` flag
    pub fn new(answers: Answers, use_docker: bool) -> Self {
        Self {
            app_name: answers.app_name,
            use_gulp: answers.use_gulp,
            use_bootstrap: answers.use_bootstrap,
            use_docker,
        }
    }

    /// Name of the directory the project is generated into.
    ///
    /// The app name is used as typed, unless it is not a single plain path
    /// component, in which case the package name stands in.
    pub fn directory_name(&self, identity: &DerivedIdentity) -> String {
        let trimmed = self.app_name.trim();
        let mut components = Path::new(trimmed).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == trimmed => trimmed.to_string(),
            _ => identity.package_name.clone(),
        }
    }
}

/// Slug used when the package name has no ASCII letters or digits
pub const FALLBACK_SLUG: &str = "blanksite";

/// Namespace and package name derived from the app name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIdentity {
    pub namespace: String,
    pub package_name: String,
}

impl DerivedIdentity {
    pub fn derive(app_name: &str) -> Self {
        let symbol = symbolize(app_name);
        Self {
            namespace: symbol.clone(),
            package_name: symbol,
        }
    }

    /// Package name reduced to ASCII `[a-z0-9]`, as npm package names and
    /// docker image names require. Falls back to [`FALLBACK_SLUG`].
    pub fn slug(&self) -> String {
        let slug: String = self
            .package_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            slug
        }
    }
}
