//! Blank Site CLI - Project scaffolding for blank ASP.NET sites

use anyhow::{Context, Result};
use blanksite_core::tui::CreateArgs;
use blanksite_core::{AnswerPresets, GeneratorConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-blank-site")]
#[command(about = "CLI for scaffolding blank ASP.NET sites")]
#[command(version)]
pub struct Args {
    /// Generate a Dockerfile so the app can run inside a Docker container
    #[arg(long)]
    pub docker: bool,

    /// Name of the app (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Use the Gulp build system (skips the Gulp prompt)
    #[arg(long)]
    pub gulp: bool,

    /// Include Twitter Bootstrap support (skips the Bootstrap prompt)
    #[arg(long)]
    pub bootstrap: bool,

    /// YAML file with the answers (app_name, use_gulp, use_bootstrap); no prompts are shown
    #[arg(short, long, conflicts_with = "yes")]
    pub answers: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Do not run `npm install` in the new project
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Local directory to use for templates instead of the built-in ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            presets: AnswerPresets {
                app_name: args.name,
                use_gulp: args.gulp.then_some(true),
                use_bootstrap: args.bootstrap.then_some(true),
            },
            answers_file: args.answers,
            docker: args.docker,
            skip_install: args.skip_install,
            directory: args.directory,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = GeneratorConfig::from_env(args.template_dir.clone());

    let result = blanksite_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let outcome = result?;
    std::env::set_current_dir(&outcome.project_root).with_context(|| {
        format!(
            "Failed to change into {}",
            outcome.project_root.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_prompt_for_everything() {
        let args = Args::try_parse_from(["create-blank-site"]).unwrap();
        let create: CreateArgs = args.into();

        assert_eq!(create.presets, AnswerPresets::default());
        assert!(!create.docker);
        assert!(!create.yes);
        assert!(!create.skip_install);
    }

    #[test]
    fn test_flags_become_presets() {
        let args = Args::try_parse_from([
            "create-blank-site",
            "--docker",
            "--name",
            "My Cool App!",
            "--gulp",
            "--skip-install",
        ])
        .unwrap();
        let create: CreateArgs = args.into();

        assert_eq!(create.presets.app_name.as_deref(), Some("My Cool App!"));
        assert_eq!(create.presets.use_gulp, Some(true));
        assert_eq!(create.presets.use_bootstrap, None);
        assert!(create.docker);
        assert!(create.skip_install);
    }

    #[test]
    fn test_answers_conflicts_with_yes() {
        let err = Args::try_parse_from(["create-blank-site", "--answers", "a.yaml", "--yes"]);
        assert!(err.is_err());
    }
}
