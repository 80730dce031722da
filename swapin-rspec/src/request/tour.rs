//! The descriptive tour attached to a request.

use bon::Builder;

/// Human-readable text blocks shown by the portal alongside an experiment.
///
/// Both blocks are markdown.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(builder_type = Builder)]
pub struct Tour {
    /// What the profile instantiates.
    #[builder(into)]
    description: String,

    /// How to use the experiment once it is ready.
    #[builder(into)]
    instructions: String,
}

impl Tour {
    /// Gets the description block.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Gets the instructions block.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}
