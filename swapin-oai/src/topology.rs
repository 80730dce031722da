//! Topology construction for the two experiment variants.

use swapin::Request;
use swapin::rspec::Result;
use swapin::rspec::request::Execute;
use swapin::rspec::request::InterfaceRef;
use swapin::rspec::request::Link;
use swapin::rspec::request::Node;
use swapin::rspec::request::link::LinkKind;
use swapin::rspec::request::node::Desire;
use swapin::rspec::request::node::SliverKind;
use tracing::debug;

use crate::Globals;
use crate::Params;
use crate::dataset::OaiDataset;
use crate::dataset::attach_oai_dataset;
use crate::params::Experiment;
use crate::tour;

/// Builds the resource request for the bound parameters.
///
/// Exactly one variant is built per invocation, selected by the experiment
/// type; both variants share the EPC node and join everything RAN-side onto
/// the EPC link(s).
pub fn build(params: &Params) -> Result<Request> {
    let mut request = Request::new();

    match params.experiment() {
        Experiment::Sim => {
            debug!("building the simulated RAN variant");
            build_sim(&mut request, params)?;
        }
        Experiment::Atten => {
            debug!("building the OTS UE / attenuator variant");
            build_atten(&mut request, params)?;
        }
    }

    request.set_tour(tour::tour());
    Ok(request)
}

/// One compute node runs the simulated UE and eNodeB next to the EPC.
fn build_sim(request: &mut Request, params: &Params) -> Result<()> {
    let mut sim_enb = Node::builder()
        .client_id("sim-enb")
        .sliver(SliverKind::RawPc)
        .disk_image(Globals::OAI_SIM_IMG)
        .hardware_type(params.sim_hardware().name())
        .build();
    sim_enb.add_service(Execute::sh(format!(
        "{} -r SIM_ENB",
        Globals::OAI_CONF_SCRIPT
    )));
    attach_oai_dataset(request, &mut sim_enb, OaiDataset::Simulation)?;
    request.add_node(sim_enb)?;

    add_epc(request)?;

    request.add_link(epc_link("s1-lan1"))?;
    request.connect("s1-lan1", "sim-enb")?;
    request.connect("s1-lan1", "epc")?;
    Ok(())
}

/// An OTS UE reaches two SDR eNodeBs through the attenuator matrix; both
/// eNodeBs connect to the shared EPC over their own EPC-side link.
fn build_atten(request: &mut Request, params: &Params) -> Result<()> {
    let adb_tgt = Node::builder()
        .client_id("adb-tgt")
        .sliver(SliverKind::RawPc)
        .disk_image(Globals::ADB_IMG)
        .build();
    request.add_node(adb_tgt)?;

    let enb1_rf = add_enb(request, "enb1", params)?;
    let enb2_rf = add_enb(request, "enb2", params)?;

    let mut rue1 = Node::builder()
        .client_id("rue1")
        .sliver(SliverKind::Ue)
        .hardware_type(Globals::UE_HWTYPE)
        .disk_image(Globals::UE_IMG)
        .maybe_component_id(params.fixed_ue().map(str::to_owned))
        .adb_target("adb-tgt")
        .build();
    rue1.add_desire(Desire::new(Globals::RF_CONTROLLED, 1.0));
    let rue1_enb1_rf = rue1.interface("enb1_rf");
    let rue1_enb2_rf = rue1.interface("enb2_rf");
    request.add_node(rue1)?;

    add_rf_link(request, "rflink1", enb1_rf, rue1_enb1_rf)?;
    add_rf_link(request, "rflink2", enb2_rf, rue1_enb2_rf)?;

    add_epc(request)?;

    request.add_link(epc_link("s1-lan1"))?;
    request.connect("s1-lan1", "enb1")?;
    request.connect("s1-lan1", "epc")?;

    request.add_link(epc_link("s1-lan2"))?;
    request.connect("s1-lan2", "enb2")?;
    request.connect("s1-lan2", "epc")?;
    Ok(())
}

/// Adds one SDR eNodeB node and returns its RF-facing interface.
///
/// When a fixed eNodeB device was supplied, the node is pinned to it. Note
/// that the same device id is applied to every eNodeB this profile creates.
fn add_enb(request: &mut Request, client_id: &str, params: &Params) -> Result<InterfaceRef> {
    let mut enb = Node::builder()
        .client_id(client_id)
        .sliver(SliverKind::RawPc)
        .hardware_type(Globals::NUC_HWTYPE)
        .disk_image(Globals::OAI_ENB_IMG)
        .maybe_component_id(params.fixed_enb().map(str::to_owned))
        .build();
    enb.add_desire(Desire::new(Globals::RF_CONTROLLED, 1.0));
    attach_oai_dataset(request, &mut enb, OaiDataset::Develop)?;
    enb.add_service(Execute::sh(format!("{} -r ENB", Globals::OAI_CONF_SCRIPT)));
    let rf = enb.interface("rue1_rf");
    request.add_node(enb)?;
    Ok(rf)
}

/// Adds the RF link pairing the UE with one eNodeB.
fn add_rf_link(
    request: &mut Request,
    client_id: &str,
    enb_rf: InterfaceRef,
    ue_rf: InterfaceRef,
) -> Result<()> {
    let mut link = Link::builder().client_id(client_id).kind(LinkKind::Rf).build();
    link.add_interface(enb_rf);
    link.add_interface(ue_rf);
    request.add_link(link)
}

/// Adds the shared OAI EPC (HSS, MME, SPGW) node.
fn add_epc(request: &mut Request) -> Result<()> {
    let mut epc = Node::builder()
        .client_id("epc")
        .sliver(SliverKind::RawPc)
        .disk_image(Globals::OAI_EPC_IMG)
        .build();
    epc.add_service(Execute::sh(format!("{} -r EPC", Globals::OAI_CONF_SCRIPT)));
    attach_oai_dataset(request, &mut epc, OaiDataset::Develop)?;
    request.add_node(epc)
}

/// An EPC-side LAN with multiplexing, VLAN tagging, and best-effort
/// transport all enabled.
fn epc_link(client_id: &str) -> Link {
    Link::builder()
        .client_id(client_id)
        .link_multiplexing(true)
        .vlan_tagging(true)
        .best_effort(true)
        .build()
}
