//! Progress reporting and the post-generation instructions

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::options::{DerivedIdentity, ScaffoldOptions};

/// Receives progress messages and the final instructions of a run
pub trait Reporter {
    fn info(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn next_steps(&mut self, steps: &NextSteps) -> Result<()>;
}

/// A command the user can run, with a short explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub command: String,
    pub description: String,
}

impl StepCommand {
    fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// A titled group of commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSection {
    pub heading: String,
    pub note: Option<String>,
    pub commands: Vec<StepCommand>,
}

/// Instructions printed once the project has been generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    /// Prerequisites of the generated project
    pub prerequisites: Vec<String>,

    /// Shell command that enters the project directory
    pub change_dir: String,

    pub sections: Vec<StepSection>,
}

impl NextSteps {
    pub fn for_run(
        options: &ScaffoldOptions,
        identity: &DerivedIdentity,
        directory_name: &str,
        config: &GeneratorConfig,
    ) -> Self {
        let prerequisites = vec![
            "This site uses ASP.NET vNext, which requires the build tools to be installed"
                .to_string(),
            format!("Please read {} for more information", config.docs_url),
        ];

        let mut sections = vec![StepSection {
            heading: "Build commands".to_string(),
            note: None,
            commands: vec![
                StepCommand::new("dnu restore", "to restore packages"),
                StepCommand::new("dnu build", "to build the project"),
                StepCommand::new(
                    "dnx web",
                    format!("to run the project on {}", config.site_url()),
                ),
            ],
        }];

        if options.use_gulp {
            let mut commands = vec![StepCommand::new("gulp", "Run default gulp task")];
            if options.use_bootstrap {
                commands.push(StepCommand::new(
                    "gulp bootstrap",
                    "Copy Twitter Bootstrap assets",
                ));
            }
            sections.push(StepSection {
                heading: "Gulp commands".to_string(),
                note: Some("Requires global gulp to be installed".to_string()),
                commands,
            });
        }

        if options.use_docker {
            let tag = identity.slug();
            sections.push(StepSection {
                heading: "Docker commands".to_string(),
                note: None,
                commands: vec![
                    StepCommand::new(
                        format!("sudo docker build -t {} .", tag),
                        "to build a new docker image",
                    ),
                    StepCommand::new(
                        format!("sudo docker run -t -d -p 80:{} {}", config.web_port, tag),
                        "to run the image",
                    ),
                ],
            });
        }

        Self {
            prerequisites,
            change_dir: format!("cd \"{}\"", directory_name),
            sections,
        }
    }

    pub fn section(&self, heading: &str) -> Option<&StepSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}
