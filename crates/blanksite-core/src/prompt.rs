//! Collecting answers from the user (or from a script)

use crate::error::Result;
use crate::options::Answers;
use anyhow::Context;
use std::path::Path;

/// Default answer of the yes/no questions, shared by the interactive prompts
/// and `--yes`
pub const DEFAULT_CONFIRM: bool = true;

/// Answers already supplied on the command line; prompts are skipped for these
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerPresets {
    pub app_name: Option<String>,
    pub use_gulp: Option<bool>,
    pub use_bootstrap: Option<bool>,
}

impl AnswerPresets {
    /// Fill anything not preset with its default answer
    pub fn complete(self, default_app_name: &str) -> Answers {
        Answers {
            app_name: self
                .app_name
                .unwrap_or_else(|| default_app_name.to_string()),
            use_gulp: self.use_gulp.unwrap_or(DEFAULT_CONFIRM),
            use_bootstrap: self.use_bootstrap.unwrap_or(DEFAULT_CONFIRM),
        }
    }
}

/// Source of the scaffold answers
pub trait Prompter {
    /// Ask for the app name, build system and UI framework.
    ///
    /// Fails with `PromptAborted` when the user cancels.
    fn collect(&mut self, default_app_name: &str) -> Result<Answers>;

    /// Ask whether to generate into a directory that already has entries
    fn confirm_non_empty(&mut self, dir: &Path, entries: usize) -> Result<bool>;
}

/// Prompter that replays fixed answers without any interaction
#[derive(Debug, Clone)]
pub struct ScriptedPrompter {
    answers: Option<Answers>,
    allow_non_empty: bool,
}

impl ScriptedPrompter {
    pub fn new(answers: Answers) -> Self {
        Self {
            answers: Some(answers),
            allow_non_empty: true,
        }
    }

    /// Decline to continue into non-empty directories
    pub fn refuse_non_empty(mut self) -> Self {
        self.allow_non_empty = false;
        self
    }

    /// Load answers from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file {}", path.display()))?;
        let answers: Answers = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse answers file {}", path.display()))?;
        Ok(Self::new(answers))
    }
}

impl Prompter for ScriptedPrompter {
    fn collect(&mut self, default_app_name: &str) -> Result<Answers> {
        let mut answers = self
            .answers
            .take()
            .unwrap_or_else(|| AnswerPresets::default().complete(default_app_name));
        if answers.app_name.trim().is_empty() {
            answers.app_name = default_app_name.to_string();
        }
        Ok(answers)
    }

    fn confirm_non_empty(&mut self, _dir: &Path, _entries: usize) -> Result<bool> {
        Ok(self.allow_non_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_complete_with_defaults() {
        let answers = AnswerPresets {
            use_gulp: Some(false),
            ..Default::default()
        }
        .complete("Blank Site");

        assert_eq!(answers.app_name, "Blank Site");
        assert!(!answers.use_gulp);
        assert_eq!(answers.use_bootstrap, DEFAULT_CONFIRM);
        assert!(answers.use_bootstrap);
    }

    #[test]
    fn test_scripted_blank_name_uses_default() {
        let mut prompter = ScriptedPrompter::new(Answers {
            app_name: "  ".to_string(),
            use_gulp: false,
            use_bootstrap: true,
        });
        let answers = prompter.collect("Blank Site").unwrap();
        assert_eq!(answers.app_name, "Blank Site");
        assert!(answers.use_bootstrap);
    }

    #[test]
    fn test_answers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, "app_name: Shop\nuse_gulp: true\nuse_bootstrap: true\n").unwrap();

        let mut prompter = ScriptedPrompter::from_file(&path).unwrap();
        let answers = prompter.collect("Blank Site").unwrap();
        assert_eq!(answers.app_name, "Shop");
        assert!(answers.use_gulp && answers.use_bootstrap);
    }

    #[test]
    fn test_answers_file_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, "use_gulp: [not, a, bool]\n").unwrap();

        let err = ScriptedPrompter::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("answers.yaml"));
    }

    #[test]
    fn test_refuse_non_empty() {
        let mut prompter = ScriptedPrompter::new(AnswerPresets::default().complete("Site"))
            .refuse_non_empty();
        assert!(!prompter.confirm_non_empty(Path::new("Site"), 3).unwrap());
    }
}
