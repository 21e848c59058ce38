//! Where template contents come from

use super::TemplateId;
use crate::error::{Result, ScaffoldError};
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::fs;

/// Template source - either compiled in or a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    /// Directory holding files named after [`TemplateId::source_name`]
    Local(PathBuf),
}

impl TemplateSource {
    /// Load the raw (unrendered) contents of a template
    pub async fn load(&self, template: TemplateId) -> Result<Cow<'static, str>> {
        match self {
            TemplateSource::Embedded => Ok(Cow::Borrowed(template.embedded())),
            TemplateSource::Local(dir) => {
                let path = dir.join(template.source_name());
                let content = fs::read_to_string(&path).await.map_err(|source| {
                    ScaffoldError::TemplateMissing {
                        name: template.source_name(),
                        path,
                        source,
                    }
                })?;
                Ok(Cow::Owned(content))
            }
        }
    }

    /// Short description for log output
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "built-in templates".to_string(),
            TemplateSource::Local(dir) => format!("local templates from {}", dir.display()),
        }
    }
}
