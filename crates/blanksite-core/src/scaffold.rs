//! The scaffolding pipeline
//!
//! A run moves through five stages in a fixed order:
//!
//! 1. **Collect** - ask the [`Prompter`] for the answers
//! 2. **Derive** - symbolize the app name into namespace and package name
//! 3. **Plan** - pick the templates and the project directory
//! 4. **Materialize** - render and write every planned file
//! 5. **Finalize** - install dependencies and report the next steps
//!
//! The first failing stage ends the run. Nothing is rolled back: files
//! written before a failure stay on disk.

use crate::config::GeneratorConfig;
use crate::error::{FsAction, ScaffoldError};
use crate::install::DependencyInstaller;
use crate::options::{DerivedIdentity, ScaffoldOptions};
use crate::prompt::Prompter;
use crate::report::{NextSteps, Reporter};
use crate::templates::{copy_plan, RenderContext, TemplatePlan};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Collect,
    Derive,
    Plan,
    Materialize,
    Finalize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collect => "collect",
            Stage::Derive => "derive",
            Stage::Plan => "plan",
            Stage::Materialize => "materialize",
            Stage::Finalize => "finalize",
        };
        f.write_str(name)
    }
}

/// A run that failed, and the stage it failed in
#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: ScaffoldError,
}

impl StageError {
    fn at(stage: Stage) -> impl FnOnce(ScaffoldError) -> StageError {
        move |source| StageError { stage, source }
    }
}

/// Inputs of a run that do not come from the prompts
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Directory the project directory is created in
    pub base_dir: PathBuf,

    /// Generate a Dockerfile
    pub use_docker: bool,

    /// Run the dependency installer after generating
    pub install: bool,
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub options: ScaffoldOptions,
    pub identity: DerivedIdentity,
    pub plan: TemplatePlan,
    pub directory_name: String,

    /// Root of the generated project; the caller changes into it
    pub project_root: PathBuf,

    /// Written files, relative to `project_root`
    pub written: Vec<PathBuf>,

    pub next_steps: NextSteps,
}

/// Runs the scaffolding pipeline against a configuration
pub struct Scaffolder<'a> {
    config: &'a GeneratorConfig,
    request: ScaffoldRequest,
}

impl<'a> Scaffolder<'a> {
    pub fn new(config: &'a GeneratorConfig, request: ScaffoldRequest) -> Self {
        Self { config, request }
    }

    pub async fn run<P, I, R>(
        &self,
        prompter: &mut P,
        installer: &I,
        reporter: &mut R,
    ) -> Result<ScaffoldOutcome, StageError>
    where
        P: Prompter,
        I: DependencyInstaller,
        R: Reporter,
    {
        // Collect
        let answers = prompter
            .collect(self.config.default_app_name)
            .map_err(StageError::at(Stage::Collect))?;
        let options = ScaffoldOptions::new(answers, self.request.use_docker);

        // Derive
        let identity = DerivedIdentity::derive(&options.app_name);

        // Plan
        let (plan, directory_name, project_root) = self
            .plan(&options, &identity, prompter, reporter)
            .map_err(StageError::at(Stage::Plan))?;

        // Materialize
        let context = RenderContext::new(&options, &identity, self.config);
        let written = self
            .materialize(&plan, &context, &project_root, reporter)
            .await
            .map_err(StageError::at(Stage::Materialize))?;

        // Finalize
        let next_steps = NextSteps::for_run(&options, &identity, &directory_name, self.config);
        self.finalize(&project_root, &next_steps, installer, reporter)
            .await
            .map_err(StageError::at(Stage::Finalize))?;

        Ok(ScaffoldOutcome {
            options,
            identity,
            plan,
            directory_name,
            project_root,
            written,
            next_steps,
        })
    }

    fn plan<P: Prompter, R: Reporter>(
        &self,
        options: &ScaffoldOptions,
        identity: &DerivedIdentity,
        prompter: &mut P,
        reporter: &mut R,
    ) -> Result<(TemplatePlan, String, PathBuf), ScaffoldError> {
        reporter.info(&format!(
            "Setting the application namespace to {}",
            identity.namespace
        ))?;

        let plan = TemplatePlan::for_options(options);
        let directory_name = options.directory_name(identity);
        let project_root = self.request.base_dir.join(&directory_name);

        let entries = count_entries(&project_root)?;
        if entries > 0 && !prompter.confirm_non_empty(&project_root, entries)? {
            return Err(ScaffoldError::PromptAborted);
        }

        Ok((plan, directory_name, project_root))
    }

    async fn materialize<R: Reporter>(
        &self,
        plan: &TemplatePlan,
        context: &RenderContext,
        project_root: &Path,
        reporter: &mut R,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        reporter.info(&format!(
            "Using {}",
            self.config.template_source.describe()
        ))?;

        let written = copy_plan(&self.config.template_source, plan, context, project_root).await?;

        reporter.success(&format!(
            "Created {} files in {}",
            written.len(),
            project_root.display()
        ))?;
        Ok(written)
    }

    async fn finalize<I: DependencyInstaller, R: Reporter>(
        &self,
        project_root: &Path,
        next_steps: &NextSteps,
        installer: &I,
        reporter: &mut R,
    ) -> Result<(), ScaffoldError> {
        if self.request.install {
            reporter.info(&format!(
                "Installing dependencies with {}",
                installer.describe()
            ))?;
            installer.install(project_root).await?;
            reporter.success("Dependencies installed")?;
        } else {
            reporter.info("Skipping dependency installation")?;
        }

        reporter.next_steps(next_steps)
    }
}

/// Number of entries in `dir`, zero when it does not exist
fn count_entries(dir: &Path) -> Result<usize, ScaffoldError> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let entries =
        std::fs::read_dir(dir).map_err(|e| ScaffoldError::fs(FsAction::ReadDir, dir, e))?;
    Ok(entries.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::options::Answers;
    use crate::prompt::ScriptedPrompter;
    use crate::templates::TemplateId;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use walkdir::WalkDir;

    #[derive(Default)]
    struct RecordingReporter {
        messages: Vec<String>,
        next_steps: Option<NextSteps>,
    }

    impl Reporter for RecordingReporter {
        fn info(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn success(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn next_steps(&mut self, steps: &NextSteps) -> Result<()> {
            self.next_steps = Some(steps.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingInstaller {
        fail: bool,
        calls: Mutex<Vec<PathBuf>>,
    }

    impl DependencyInstaller for RecordingInstaller {
        fn describe(&self) -> String {
            "fake install".to_string()
        }

        async fn install(&self, project_root: &Path) -> Result<()> {
            self.calls.lock().unwrap().push(project_root.to_path_buf());
            if self.fail {
                Err(ScaffoldError::DependencyInstall("registry unreachable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    struct AbortingPrompter;

    impl Prompter for AbortingPrompter {
        fn collect(&mut self, _default_app_name: &str) -> Result<Answers> {
            Err(ScaffoldError::PromptAborted)
        }

        fn confirm_non_empty(&mut self, _dir: &Path, _entries: usize) -> Result<bool> {
            Ok(true)
        }
    }

    fn answers(app_name: &str, use_gulp: bool, use_bootstrap: bool) -> ScriptedPrompter {
        ScriptedPrompter::new(Answers {
            app_name: app_name.to_string(),
            use_gulp,
            use_bootstrap,
        })
    }

    fn request(base_dir: &Path, use_docker: bool) -> ScaffoldRequest {
        ScaffoldRequest {
            base_dir: base_dir.to_path_buf(),
            use_docker,
            install: true,
        }
    }

    fn tree(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    #[tokio::test]
    async fn test_plain_site_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();

        let outcome = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut answers("My Cool App!", false, false), &installer, &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome.identity.namespace, "MyCoolApp");
        assert_eq!(outcome.identity.package_name, "MyCoolApp");
        assert_eq!(outcome.project_root, dir.path().join("My Cool App!"));
        assert_eq!(
            tree(&outcome.project_root),
            vec![
                ".gitignore",
                "Controllers/HomeController.cs",
                "Startup.cs",
                "Views/Home/Index.cshtml",
                "Views/Shared/_Layout.cshtml",
                "Views/_ViewStart.cshtml",
                "package.json",
                "project.json",
                "wwwroot/web.config",
            ]
        );

        let layout =
            std::fs::read_to_string(outcome.project_root.join("Views/Shared/_Layout.cshtml"))
                .unwrap();
        assert!(!layout.contains("bootstrap"));
        let startup = std::fs::read_to_string(outcome.project_root.join("Startup.cs")).unwrap();
        assert!(startup.contains("namespace MyCoolApp"));

        assert_eq!(
            *installer.calls.lock().unwrap(),
            vec![outcome.project_root.clone()]
        );
        assert!(reporter
            .messages
            .contains(&"Setting the application namespace to MyCoolApp".to_string()));
        assert_eq!(reporter.next_steps, Some(outcome.next_steps.clone()));
        assert!(outcome.next_steps.section("Gulp commands").is_none());
        assert!(outcome.next_steps.section("Docker commands").is_none());
    }

    #[tokio::test]
    async fn test_full_site_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();

        let outcome = Scaffolder::new(&config, request(dir.path(), true))
            .run(&mut answers("My Cool App!", true, true), &installer, &mut reporter)
            .await
            .unwrap();

        let files = tree(&outcome.project_root);
        assert!(files.contains(&"gulpfile.js".to_string()));
        assert!(files.contains(&"Dockerfile".to_string()));
        assert_eq!(files.len(), 11);

        assert!(outcome.plan.contains(TemplateId::LayoutBootstrap));
        assert!(outcome.plan.contains(TemplateId::IndexBootstrap));
        let index =
            std::fs::read_to_string(outcome.project_root.join("Views/Home/Index.cshtml")).unwrap();
        assert!(index.contains("jumbotron"));

        let dockerfile =
            std::fs::read_to_string(outcome.project_root.join("Dockerfile")).unwrap();
        assert!(dockerfile.contains("EXPOSE 5000"));

        assert!(outcome.next_steps.section("Gulp commands").is_some());
        assert!(outcome.next_steps.section("Docker commands").is_some());
    }

    #[tokio::test]
    async fn test_prompt_abort_fails_collect() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();

        let err = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut AbortingPrompter, &installer, &mut reporter)
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Collect);
        assert!(matches!(err.source, ScaffoldError::PromptAborted));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(installer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_declined_non_empty_directory_fails_plan() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Shop")).unwrap();
        std::fs::write(dir.path().join("Shop/notes.txt"), "keep me").unwrap();

        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();
        let mut prompter = answers("Shop", false, false).refuse_non_empty();

        let err = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut prompter, &installer, &mut reporter)
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Plan);
        assert!(matches!(err.source, ScaffoldError::PromptAborted));
        assert_eq!(tree(&dir.path().join("Shop")), vec!["notes.txt"]);
    }

    #[tokio::test]
    async fn test_write_failure_fails_materialize() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of project.json makes its write fail
        std::fs::create_dir_all(dir.path().join("Shop/project.json")).unwrap();

        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();

        let err = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut answers("Shop", false, false), &installer, &mut reporter)
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Materialize);
        assert!(matches!(
            err.source,
            ScaffoldError::FileSystem {
                action: FsAction::WriteFile,
                ..
            }
        ));

        let root = dir.path().join("Shop");
        assert!(root.join("Startup.cs").is_file());
        assert!(root.join("package.json").is_file());
        assert!(!root.join(".gitignore").exists());
        assert!(installer.calls.lock().unwrap().is_empty());
        assert!(reporter.next_steps.is_none());
    }

    #[tokio::test]
    async fn test_install_failure_fails_finalize() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller {
            fail: true,
            ..Default::default()
        };
        let mut reporter = RecordingReporter::default();

        let err = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut answers("Shop", true, false), &installer, &mut reporter)
            .await
            .unwrap_err();

        assert_eq!(err.stage, Stage::Finalize);
        assert!(matches!(err.source, ScaffoldError::DependencyInstall(_)));
        assert!(dir.path().join("Shop/gulpfile.js").is_file());
        assert!(reporter.next_steps.is_none());
    }

    #[tokio::test]
    async fn test_install_can_be_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();
        let request = ScaffoldRequest {
            install: false,
            ..request(dir.path(), false)
        };

        let outcome = Scaffolder::new(&config, request)
            .run(&mut answers("Shop", false, false), &installer, &mut reporter)
            .await
            .unwrap();

        assert!(installer.calls.lock().unwrap().is_empty());
        assert!(reporter.next_steps.is_some());
        assert_eq!(outcome.written.len(), 9);
    }

    #[tokio::test]
    async fn test_unsafe_name_uses_package_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let installer = RecordingInstaller::default();
        let mut reporter = RecordingReporter::default();

        let outcome = Scaffolder::new(&config, request(dir.path(), false))
            .run(&mut answers("../Outside", false, false), &installer, &mut reporter)
            .await
            .unwrap();

        assert_eq!(outcome.directory_name, "Outside");
        assert_eq!(outcome.project_root, dir.path().join("Outside"));
        assert_eq!(outcome.next_steps.change_dir, "cd \"Outside\"");
    }
}
