//! Choosing which templates to generate

use super::TemplateId;
use crate::options::ScaffoldOptions;
use std::path::PathBuf;

/// One template and where it ends up, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: TemplateId,
    pub destination: PathBuf,
}

impl PlannedFile {
    fn new(template: TemplateId) -> Self {
        Self {
            template,
            destination: PathBuf::from(template.destination()),
        }
    }
}

/// Ordered list of files to materialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePlan {
    files: Vec<PlannedFile>,
}

impl TemplatePlan {
    /// Select the templates for a set of options.
    ///
    /// Exactly one layout/index pair is chosen (bootstrap or plain); the
    /// gulpfile and Dockerfile follow their own flags.
    pub fn for_options(options: &ScaffoldOptions) -> Self {
        let mut files: Vec<PlannedFile> = [
            TemplateId::Startup,
            TemplateId::PackageJson,
            TemplateId::ProjectJson,
            TemplateId::GitIgnore,
            TemplateId::HomeController,
            TemplateId::ViewStart,
            TemplateId::WebConfig,
        ]
        .into_iter()
        .map(PlannedFile::new)
        .collect();

        if options.use_gulp {
            files.push(PlannedFile::new(TemplateId::Gulpfile));
        }

        let (layout, index) = if options.use_bootstrap {
            (TemplateId::LayoutBootstrap, TemplateId::IndexBootstrap)
        } else {
            (TemplateId::Layout, TemplateId::Index)
        };
        files.push(PlannedFile::new(layout));
        files.push(PlannedFile::new(index));

        if options.use_docker {
            files.push(PlannedFile::new(TemplateId::Dockerfile));
        }

        Self { files }
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn contains(&self, template: TemplateId) -> bool {
        self.files.iter().any(|f| f.template == template)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
