//! Blank Site Core - scaffolding for blank ASP.NET sites
//!
//! This library asks a few questions (app name, Gulp, Bootstrap, Docker),
//! renders a fixed set of templates into a new project directory and
//! prints what to do next.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - symbolizing names, template plans,
//!   rendering and copying, dependency installation
//! - **Layer 2: Workflow Orchestration** - the staged `Scaffolder` pipeline,
//!   driven through the `Prompter`, `DependencyInstaller` and `Reporter` seams
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use blanksite_core::{GeneratorConfig, ScaffoldRequest, Scaffolder, ScriptedPrompter};
//!
//! let config = GeneratorConfig::default();
//! let request = ScaffoldRequest { base_dir: ".".into(), use_docker: false, install: false };
//! let mut prompter = ScriptedPrompter::new(answers);
//! let outcome = Scaffolder::new(&config, request)
//!     .run(&mut prompter, &installer, &mut reporter)
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod options;
pub mod prompt;
pub mod report;
pub mod scaffold;
pub mod symbol;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use error::{FsAction, ScaffoldError};
pub use install::{DependencyInstaller, NpmInstaller};
pub use options::{Answers, DerivedIdentity, ScaffoldOptions};
pub use prompt::{AnswerPresets, Prompter, ScriptedPrompter};
pub use report::{NextSteps, Reporter};
pub use scaffold::{ScaffoldOutcome, ScaffoldRequest, Scaffolder, Stage, StageError};
pub use symbol::symbolize;
pub use templates::{TemplateId, TemplatePlan, TemplateSource};

#[cfg(feature = "tui")]
pub use tui::run;
