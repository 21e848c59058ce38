//! Charm-style CLI prompts using cliclack

use crate::config::GeneratorConfig;
use crate::error::{Result, ScaffoldError};
use crate::install::NpmInstaller;
use crate::options::Answers;
use crate::prompt::{AnswerPresets, Prompter, ScriptedPrompter, DEFAULT_CONFIRM};
use crate::report::{NextSteps, Reporter};
use crate::scaffold::{ScaffoldOutcome, ScaffoldRequest, Scaffolder};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Answers given as flags; the matching prompts are skipped
    pub presets: AnswerPresets,

    /// YAML file with all answers (non-interactive)
    pub answers_file: Option<PathBuf>,

    /// Generate a Dockerfile
    pub docker: bool,

    /// Do not install dependencies after generating
    pub skip_install: bool,

    /// Directory to create the project in (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Asks the scaffold questions with cliclack
#[derive(Debug, Clone, Default)]
pub struct InteractivePrompter {
    presets: AnswerPresets,
}

impl InteractivePrompter {
    pub fn new(presets: AnswerPresets) -> Self {
        Self { presets }
    }
}

impl Prompter for InteractivePrompter {
    fn collect(&mut self, default_app_name: &str) -> Result<Answers> {
        let app_name = match self.presets.app_name.clone() {
            Some(name) => {
                cliclack::log::info(format!("App name: {}", name))?;
                name
            }
            None => cliclack::input("What's the name of your app?")
                .placeholder(default_app_name)
                .default_input(default_app_name)
                .interact()
                .map_err(ScaffoldError::from_prompt)?,
        };

        let use_gulp = match self.presets.use_gulp {
            Some(value) => value,
            None => cliclack::confirm("Use the Gulp build system?")
                .initial_value(DEFAULT_CONFIRM)
                .interact()
                .map_err(ScaffoldError::from_prompt)?,
        };

        let use_bootstrap = match self.presets.use_bootstrap {
            Some(value) => value,
            None => cliclack::confirm("Include Twitter Bootstrap support?")
                .initial_value(DEFAULT_CONFIRM)
                .interact()
                .map_err(ScaffoldError::from_prompt)?,
        };

        Ok(Answers {
            app_name,
            use_gulp,
            use_bootstrap,
        })
    }

    fn confirm_non_empty(&mut self, dir: &Path, entries: usize) -> Result<bool> {
        cliclack::log::warning(format!(
            "{} already has {} existing items",
            dir.display(),
            entries
        ))?;

        cliclack::confirm("Continue anyway?")
            .initial_value(false)
            .interact()
            .map_err(ScaffoldError::from_prompt)
    }
}

/// Reports progress with cliclack log lines and prints the next steps
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message)?;
        Ok(())
    }

    fn next_steps(&mut self, steps: &NextSteps) -> Result<()> {
        println!();
        for line in &steps.prerequisites {
            println!("  {}", line);
        }

        println!();
        println!("  Do {}, then:", steps.change_dir.green());

        for section in &steps.sections {
            println!();
            match &section.note {
                Some(note) => println!("  {}: {}", section.heading.bold(), note.blue()),
                None => println!("  {}:", section.heading.bold()),
            }
            for cmd in &section.commands {
                println!("    {}\t{}", cmd.command.green(), cmd.description);
            }
        }
        println!();

        Ok(())
    }
}

/// Run the CLI with interactive prompts.
///
/// Returns the outcome so the caller can move into the project directory.
pub async fn run(config: &GeneratorConfig, args: CreateArgs) -> anyhow::Result<ScaffoldOutcome> {
    cliclack::intro(config.display_name)?;

    let base_dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let request = ScaffoldRequest {
        base_dir,
        use_docker: args.docker,
        install: !args.skip_install,
    };
    let scaffolder = Scaffolder::new(config, request);
    let installer = NpmInstaller::for_program(config.install_program);
    let mut reporter = ConsoleReporter;

    let result = if let Some(path) = &args.answers_file {
        cliclack::log::info(format!("Using answers from {}", path.display()))?;
        let mut prompter = ScriptedPrompter::from_file(path)?;
        scaffolder.run(&mut prompter, &installer, &mut reporter).await
    } else if args.yes {
        let answers = args.presets.clone().complete(config.default_app_name);
        let mut prompter = ScriptedPrompter::new(answers);
        scaffolder.run(&mut prompter, &installer, &mut reporter).await
    } else {
        let mut prompter = InteractivePrompter::new(args.presets.clone());
        scaffolder.run(&mut prompter, &installer, &mut reporter).await
    };

    match result {
        Ok(outcome) => {
            cliclack::outro("Happy coding!")?;
            Ok(outcome)
        }
        Err(err) if matches!(err.source, ScaffoldError::PromptAborted) => {
            cliclack::outro_cancel("Setup cancelled.")?;
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
