//! The profile's portal parameters.

use nonempty::nonempty;
use serde::Deserialize;
use swapin::portal::Context;
use swapin::portal::Parameter;
use swapin::portal::parameter::Choice;
use swapin::portal::parameter::Kind;

/// The experiment variant to instantiate.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Experiment {
    /// OAI simulated UE/eNodeB connected to an OAI EPC.
    Sim,

    /// OTS UE with SDR eNodeBs behind the RF attenuator matrix.
    #[default]
    Atten,
}

/// The compute hardware types known to work for the simulated variant.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
pub enum SimHardware {
    /// A d430 compute node.
    #[default]
    #[serde(rename = "d430")]
    D430,

    /// A d740 compute node.
    #[serde(rename = "d740")]
    D740,
}

impl SimHardware {
    /// The hardware type name used in the request.
    pub fn name(&self) -> &'static str {
        match self {
            SimHardware::D430 => "d430",
            SimHardware::D740 => "d740",
        }
    }
}

/// The typed view of the profile's bound parameters.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Params {
    /// Which experiment variant to build.
    #[serde(rename = "TYPE", default)]
    experiment: Experiment,

    /// A fixed UE device to bind to (empty means let the mapper choose).
    #[serde(rename = "FIXED_UE", default)]
    fixed_ue: String,

    /// A fixed eNodeB device to bind to (empty means let the mapper choose).
    #[serde(rename = "FIXED_ENB", default)]
    fixed_enb: String,

    /// The compute hardware type for the simulated variant.
    #[serde(rename = "SIM_HWTYPE", default)]
    sim_hardware: SimHardware,
}

impl Params {
    /// Gets the experiment variant.
    pub fn experiment(&self) -> Experiment {
        self.experiment
    }

    /// Gets the fixed UE device id (if one was supplied).
    pub fn fixed_ue(&self) -> Option<&str> {
        match self.fixed_ue.as_str() {
            "" => None,
            id => Some(id),
        }
    }

    /// Gets the fixed eNodeB device id (if one was supplied).
    pub fn fixed_enb(&self) -> Option<&str> {
        match self.fixed_enb.as_str() {
            "" => None,
            id => Some(id),
        }
    }

    /// Gets the compute hardware type for the simulated variant.
    pub fn sim_hardware(&self) -> SimHardware {
        self.sim_hardware
    }

    /// Builds the typed view from verified bindings.
    pub fn from_bindings(bindings: &swapin::portal::Bindings) -> swapin::portal::Result<Self> {
        bindings.deserialize()
    }
}

/// Builds the declaration context for the profile's four parameters.
pub fn context() -> Context {
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
                .long_description(
                    "*Simulated RAN*: OAI simulated UE/eNodeB connected to an OAI EPC. \
                     *OTS UE/SDR-based eNodeB with RF attenuator connected to OAI EPC*: \
                     OTS UE (Nexus 5) connected to controllable RF attenuator matrix.",
                )
                .build(),
        )
        .define(
            Parameter::builder()
                .id("FIXED_UE")
                .prompt("Bind to a specific UE")
                .kind(Kind::String)
                .default("")
                .advanced(true)
                .long_description(
                    "Input the name of a POWDER controlled RF UE node to allocate \
                     (e.g., 'ue1').  Leave blank to let the mapping algorithm choose.",
                )
                .build(),
        )
        .define(
            Parameter::builder()
                .id("FIXED_ENB")
                .prompt("Bind to a specific eNodeB")
                .kind(Kind::String)
                .default("")
                .advanced(true)
                .long_description(
                    "Input the name of a POWDER controlled RF eNodeB device to allocate \
                     (e.g., 'nuc1').  Leave blank to let the mapping algorithm choose.  \
                     If you bind both UE and eNodeB devices, mapping will fail unless \
                     there is path between them via the attenuator matrix.  The same \
                     device id is applied to both eNodeB nodes.",
                )
                .build(),
        )
        .define(
            Parameter::builder()
                .id("SIM_HWTYPE")
                .prompt("Compute hardware type to use (SIM mode only)")
                .kind(Kind::String)
                .default("d430")
                .choices(nonempty![
                    Choice::new("d430", "d430"),
                    Choice::new("d740", "d740")
                ])
                .advanced(true)
                .long_description(
                    "Use this parameter if you would like to select a different hardware \
                     type to use FOR SIMULATED MODE.  The types in this list are known \
                     to work.",
                )
                .build(),
        );
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_attenuator_variant() {
        let params = Params::default();
        assert_eq!(params.experiment(), Experiment::Atten);
        assert_eq!(params.fixed_ue(), None);
        assert_eq!(params.fixed_enb(), None);
        assert_eq!(params.sim_hardware(), SimHardware::D430);
    }

    #[test]
    fn bindings_round_trip_through_the_context() {
        let context = context();
        let bindings = context.bind_from(context.default_sources()).unwrap();
        context.verify(&bindings).unwrap();

        let params = Params::from_bindings(&bindings).unwrap();
        assert_eq!(params.experiment(), Experiment::Atten);
        assert_eq!(params.sim_hardware(), SimHardware::D430);
    }

    #[test]
    fn sim_bindings_deserialize() {
        let params: Params = serde_json::from_value(serde_json::json!({
            "TYPE": "sim",
            "SIM_HWTYPE": "d740",
        }))
        .unwrap();
        assert_eq!(params.experiment(), Experiment::Sim);
        assert_eq!(params.sim_hardware(), SimHardware::D740);
        assert_eq!(params.fixed_ue(), None);
    }
}
