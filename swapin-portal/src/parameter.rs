//! Declared profile parameters.
//!
//! A parameter declaration carries everything the portal needs to render an
//! input form and to check a bound value: an id, a prompt, a kind, a default,
//! and optionally a menu of enumerated choices.

use bon::Builder;
use nonempty::NonEmpty;

/// The kind of value a parameter accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// A free-form or menu-constrained string.
    String,

    /// An integer.
    Integer,

    /// A boolean.
    Boolean,
}

impl Kind {
    /// Whether a bound JSON value is of this kind.
    pub fn admits(&self, value: &serde_json::Value) -> bool {
        match self {
            Kind::String => value.is_string(),
            Kind::Integer => value.is_i64() || value.is_u64(),
            Kind::Boolean => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::String => write!(f, "string"),
            Kind::Integer => write!(f, "integer"),
            Kind::Boolean => write!(f, "boolean"),
        }
    }
}

/// One entry in a parameter's enumerated menu.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Choice {
    /// The value bound when the choice is selected.
    value: String,

    /// The text shown for the choice.
    prompt: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            prompt: prompt.into(),
        }
    }

    /// Gets the bindable value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Gets the display prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// A declared profile parameter.
#[derive(Builder, Clone, Debug)]
#[builder(builder_type = Builder)]
pub struct Parameter {
    /// The id the parameter binds under.
    #[builder(into)]
    id: String,

    /// The short prompt shown next to the input.
    #[builder(into)]
    prompt: String,

    /// The kind of value accepted.
    kind: Kind,

    /// The value used when no binding is supplied.
    #[builder(into)]
    default: serde_json::Value,

    /// The enumerated menu the value must come from (if constrained).
    choices: Option<NonEmpty<Choice>>,

    /// Whether the parameter is hidden behind the portal's advanced toggle.
    #[builder(default)]
    advanced: bool,

    /// Longer help text rendered alongside the input.
    #[builder(into)]
    long_description: Option<String>,
}

impl Parameter {
    /// Gets the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Gets the kind of value accepted.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the default value.
    pub fn default(&self) -> &serde_json::Value {
        &self.default
    }

    /// Gets the enumerated menu (if constrained).
    pub fn choices(&self) -> Option<&NonEmpty<Choice>> {
        self.choices.as_ref()
    }

    /// Whether the parameter is an advanced option.
    pub fn advanced(&self) -> bool {
        self.advanced
    }

    /// Gets the longer help text (if any).
    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    /// Whether a bound value satisfies this declaration.
    ///
    /// The value must be of the declared kind and, when a menu is declared,
    /// must be one of its entries.
    pub fn admits(&self, value: &serde_json::Value) -> bool {
        if !self.kind.admits(value) {
            return false;
        }

        match (&self.choices, value.as_str()) {
            (Some(choices), Some(value)) => choices.iter().any(|choice| choice.value() == value),
            _ => true,
        }
    }
}
