//! Parameter declaration and binding for portal-hosted profiles.
//!
//! A few notes on the structure of this crate.
//!
//! * A profile declares its configurable options as [`Parameter`]s on a
//!   [`Context`], binds whatever values the hosting portal supplied, and
//!   verifies the bound values in a single gate before any topology is
//!   constructed.
//! * Verification collects *every* problem into structured [`Diagnostic`]s
//!   rather than stopping at the first, so the portal can annotate the whole
//!   form at once. There is no local recovery: a failed verification is fatal
//!   to the invocation.

use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

mod bindings;
mod diagnostic;
pub mod parameter;

pub use bindings::Bindings;
pub use diagnostic::Diagnostic;
pub use diagnostic::Severity;
pub use parameter::Parameter;

/// The file name the portal writes bound parameter values to.
pub const FILE_NAME: &str = "parameters.json";

/// The environment variable naming an additional bindings file.
pub const FILE_ENV: &str = "SWAPIN_PARAMS";

/// The environment variable prefix for individual parameter overrides.
pub const PARAM_ENV_PREFIX: &str = "SWAPIN_PARAM_";

/// A global error within this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter id was declared more than once.
    #[error("duplicate parameter: `{0}`")]
    DuplicateParameter(String),

    /// The bound values could not be gathered from the configured sources.
    #[error(transparent)]
    Binding(#[from] figment::Error),

    /// The bound values could not be deserialized into the profile's
    /// parameter struct.
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),

    /// One or more bound values failed verification.
    ///
    /// The payload carries every diagnostic collected, warnings included.
    #[error("parameter verification failed with {} error(s)", .0.iter().filter(|d| d.is_error()).count())]
    Invalid(Vec<Diagnostic>),
}

impl Error {
    /// Gets the diagnostics carried by an [`Error::Invalid`] (if any).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Invalid(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The declaration context a profile registers its parameters on.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The declared parameters, in declaration order.
    parameters: Vec<Parameter>,
}

impl Context {
    /// Creates a new, empty [`Context`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a parameter.
    pub fn define(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    /// Gets the declared parameters, in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Gets a declared parameter by id.
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.id() == id)
    }

    /// Gets a figment with the default binding sources preloaded.
    ///
    /// Sources are merged in increasing precedence:
    ///
    /// * the declared defaults,
    /// * `<CWD>/parameters.json`,
    /// * the file named by `SWAPIN_PARAMS` (if the variable is present),
    /// * `SWAPIN_PARAM_*` environment variables.
    pub fn default_sources(&self) -> Figment {
        let mut sources = Figment::new().admerge(Serialized::defaults(self.defaults()));

        if let Ok(mut path) = std::env::current_dir() {
            path.push(FILE_NAME);
            sources = sources.admerge(Json::file(path));
        }

        if let Ok(bindings_file) = std::env::var(FILE_ENV) {
            sources = sources.admerge(Json::file(bindings_file));
        }

        sources.admerge(Env::prefixed(PARAM_ENV_PREFIX))
    }

    /// Binds parameter values from the default set of sources.
    pub fn bind(&self) -> Result<Bindings> {
        self.bind_from(self.default_sources())
    }

    /// Binds parameter values from the default sources plus an explicit
    /// bindings file, which takes precedence over everything but the
    /// environment.
    pub fn bind_file(&self, path: impl AsRef<Path>) -> Result<Bindings> {
        let sources = self
            .default_sources()
            .admerge(Json::file(path.as_ref()))
            .admerge(Env::prefixed(PARAM_ENV_PREFIX));
        self.bind_from(sources)
    }

    /// Binds parameter values from an explicit set of sources.
    ///
    /// The returned bindings hold the declared parameters in declaration
    /// order, followed by any ids the sources supplied that were never
    /// declared (those are reported at verify time).
    ///
    /// Source keys are matched to declared ids case-insensitively (the
    /// environment provider folds keys to lowercase) and stored under the
    /// declared id.
    pub fn bind_from(&self, sources: Figment) -> Result<Bindings> {
        let mut bound: IndexMap<String, serde_json::Value> = sources.extract()?;

        let mut values = IndexMap::new();
        for parameter in &self.parameters {
            let value = bound.shift_remove(parameter.id()).or_else(|| {
                let key = bound
                    .keys()
                    .find(|key| key.eq_ignore_ascii_case(parameter.id()))?
                    .clone();
                bound.shift_remove(&key)
            });
            let value = value.unwrap_or_else(|| parameter.default().clone());
            values.insert(parameter.id().to_owned(), value);
        }
        values.extend(bound);

        debug!("bound {} parameter value(s)", values.len());
        Ok(Bindings::new(values))
    }

    /// Verifies bound values against the declarations.
    ///
    /// On success, any non-fatal diagnostics (warnings) are returned. On
    /// failure, [`Error::Invalid`] carries every diagnostic collected.
    pub fn verify(&self, bindings: &Bindings) -> Result<Vec<Diagnostic>> {
        self.parameters
            .iter()
            .try_fold(HashSet::new(), |mut found, parameter| {
                if found.contains(parameter.id()) {
                    return Err(Error::DuplicateParameter(parameter.id().to_owned()));
                }

                found.insert(parameter.id());
                Ok(found)
            })?;

        let mut diagnostics = Vec::new();
        for (id, value) in bindings.iter() {
            match self.parameter(id) {
                None => {
                    diagnostics.push(Diagnostic::warning(id, "not a declared parameter"));
                }
                Some(parameter) if !parameter.kind().admits(value) => {
                    diagnostics.push(Diagnostic::error(
                        id,
                        format!("expected a {} value, got `{value}`", parameter.kind()),
                    ));
                }
                Some(parameter) if !parameter.admits(value) => {
                    let menu = parameter
                        .choices()
                        .map(|choices| {
                            choices
                                .iter()
                                .map(|choice| format!("`{}`", choice.value()))
                                .collect::<Vec<_>>()
                                .join(", ")
                        })
                        .unwrap_or_default();
                    diagnostics.push(Diagnostic::error(
                        id,
                        format!("`{value}` is not one of {menu}"),
                    ));
                }
                Some(_) => {}
            }
        }

        if diagnostics.iter().any(Diagnostic::is_error) {
            return Err(Error::Invalid(diagnostics));
        }

        Ok(diagnostics)
    }

    /// Builds the id-to-default map used as the lowest-precedence source.
    fn defaults(&self) -> serde_json::Map<String, serde_json::Value> {
        self.parameters
            .iter()
            .map(|parameter| (parameter.id().to_owned(), parameter.default().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;

    use super::*;
    use crate::parameter::Choice;
    use crate::parameter::Kind;

    /// A context with the shape of a typical profile's declarations.
    fn context() -> Context {
        let mut context = Context::new();
        context
            .define(
                Parameter::builder()
                    .id("TYPE")
                    .prompt("Experiment type")
                    .kind(Kind::String)
                    .default("atten")
                    .choices(nonempty![
                        Choice::new("sim", "Simulated UE/eNodeB"),
                        Choice::new("atten", "OTS UE with RF attenuator")
                    ])
                    .build(),
            )
            .define(
                Parameter::builder()
                    .id("FIXED_UE")
                    .prompt("Bind to a specific UE")
                    .kind(Kind::String)
                    .default("")
                    .advanced(true)
                    .build(),
            );
        context
    }

    #[test]
    fn defaults_flow_through_when_unbound() {
        let context = context();
        let bindings = context.bind_from(Figment::new().admerge(
            Serialized::defaults(context.defaults()),
        ))
        .unwrap();

        assert_eq!(bindings.string("TYPE"), Some("atten"));
        assert_eq!(bindings.string("FIXED_UE"), Some(""));
        assert!(context.verify(&bindings).unwrap().is_empty());
    }

    #[test]
    fn bound_values_override_defaults() {
        let context = context();
        let sources = context
            .default_sources()
            .admerge(Json::string(r#"{ "TYPE": "sim" }"#));
        let bindings = context.bind_from(sources).unwrap();

        assert_eq!(bindings.string("TYPE"), Some("sim"));
        assert_eq!(bindings.string("FIXED_UE"), Some(""));
    }

    #[test]
    fn lowercased_keys_bind_to_declared_ids() {
        let context = context();
        let sources = context
            .default_sources()
            .admerge(Json::string(r#"{ "type": "sim", "fixed_ue": "urn:node" }"#));
        let bindings = context.bind_from(sources).unwrap();

        assert_eq!(bindings.string("TYPE"), Some("sim"));
        assert_eq!(bindings.string("FIXED_UE"), Some("urn:node"));
        assert!(context.verify(&bindings).unwrap().is_empty());
    }

    #[test]
    fn environment_variables_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SWAPIN_PARAM_TYPE", "sim");
            jail.set_env("SWAPIN_PARAM_FIXED_UE", "urn:node");

            let context = context();
            let bindings = context.bind().unwrap();
            assert_eq!(bindings.string("TYPE"), Some("sim"));
            assert_eq!(bindings.string("FIXED_UE"), Some("urn:node"));
            assert!(context.verify(&bindings).unwrap().is_empty());
            Ok(())
        });
    }

    #[test]
    fn out_of_menu_values_are_errors() {
        let context = context();
        let sources = context
            .default_sources()
            .admerge(Json::string(r#"{ "TYPE": "hybrid" }"#));
        let bindings = context.bind_from(sources).unwrap();

        let err = context.verify(&bindings).unwrap_err();
        let diagnostics = err.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
        assert_eq!(diagnostics[0].parameter(), "TYPE");
    }

    #[test]
    fn kind_mismatches_are_errors() {
        let context = context();
        let sources = context
            .default_sources()
            .admerge(Json::string(r#"{ "FIXED_UE": 7 }"#));
        let bindings = context.bind_from(sources).unwrap();

        let err = context.verify(&bindings).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
    }

    #[test]
    fn undeclared_ids_are_warnings() {
        let context = context();
        let sources = context
            .default_sources()
            .admerge(Json::string(r#"{ "TYPO": "sim" }"#));
        let bindings = context.bind_from(sources).unwrap();

        let warnings = context.verify(&bindings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].parameter(), "TYPO");
        assert!(!warnings[0].is_error());
    }

    #[test]
    fn duplicate_declarations_are_rejected() {
        let mut context = context();
        context.define(
            Parameter::builder()
                .id("TYPE")
                .prompt("Experiment type, again")
                .kind(Kind::String)
                .default("atten")
                .build(),
        );

        let bindings = context.bind_from(context.default_sources()).unwrap();
        let err = context.verify(&bindings).unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter(id) if id == "TYPE"));
    }

    #[test]
    fn bindings_deserialize_into_profile_structs() {
        #[derive(Debug, serde::Deserialize)]
        struct Params {
            #[serde(rename = "TYPE")]
            experiment: String,
            #[serde(rename = "FIXED_UE")]
            fixed_ue: String,
        }

        let context = context();
        let bindings = context.bind_from(context.default_sources()).unwrap();
        let params: Params = bindings.deserialize().unwrap();
        assert_eq!(params.experiment, "atten");
        assert_eq!(params.fixed_ue, "");
    }
}
