//! Startup services attached to nodes.

use bon::Builder;

/// A command executed on a node once it boots.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(builder_type = Builder)]
pub struct Execute {
    /// The shell used to interpret the command.
    #[builder(into)]
    shell: String,

    /// The command line to run.
    #[builder(into)]
    command: String,
}

impl Execute {
    /// Creates a new execute service run under `sh`.
    pub fn sh(command: impl Into<String>) -> Self {
        Self {
            shell: "sh".to_owned(),
            command: command.into(),
        }
    }

    /// Gets the shell.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Gets the command line.
    pub fn command(&self) -> &str {
        &self.command
    }
}
