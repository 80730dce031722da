//! Structured diagnostics for parameter verification.

use serde::Deserialize;
use serde::Serialize;

/// The severity of a diagnostic.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// The binding is unusable; the profile must not run.
    Error,

    /// The binding is suspicious but usable.
    Warning,
}

/// A single problem found while verifying bound parameters.
///
/// Diagnostics are serialized as JSON so the hosting portal can render them
/// next to the offending form inputs.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Diagnostic {
    /// The severity.
    severity: Severity,

    /// The id of the offending parameter.
    parameter: String,

    /// A human-readable description of the problem.
    message: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Gets the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Gets the id of the offending parameter.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Gets the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{severity}: parameter `{}`: {}", self.parameter, self.message)
    }
}
