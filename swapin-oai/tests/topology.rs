//! Output-shape checks for the two experiment variants.

use swapin::rspec::request::Link;
use swapin::rspec::request::Request;
use swapin::rspec::request::link::LinkKind;
use swapin::rspec::request::node::SliverKind;
use swapin_oai::Params;
use swapin_oai::topology;
use swapin_oai::tour;

/// Builds a typed parameter set from raw bound values.
fn params(value: serde_json::Value) -> Params {
    serde_json::from_value(value).expect("parameters should deserialize")
}

/// The links that are not dataset-clone plumbing.
fn topology_links(request: &Request) -> Vec<&Link> {
    request
        .links()
        .filter(|link| !link.client_id().starts_with("dslink_"))
        .collect()
}

#[test]
fn sim_variant_has_one_sim_node_and_one_epc_node() {
    let request = topology::build(&params(serde_json::json!({ "TYPE": "sim" }))).unwrap();

    let nodes: Vec<_> = request.nodes().map(|node| node.client_id()).collect();
    assert_eq!(nodes, ["sim-enb", "epc"]);

    let links = topology_links(&request);
    assert_eq!(links.len(), 1);

    let lan = links[0];
    assert_eq!(lan.client_id(), "s1-lan1");
    assert!(lan.link_multiplexing());
    assert!(lan.vlan_tagging());
    assert!(lan.best_effort());
    assert_eq!(lan.interfaces().count(), 2);

    request.emit().unwrap();
}

#[test]
fn sim_variant_uses_the_selected_hardware_type() {
    let request = topology::build(&params(serde_json::json!({
        "TYPE": "sim",
        "SIM_HWTYPE": "d740",
    })))
    .unwrap();

    let sim_enb = request.node("sim-enb").unwrap();
    assert_eq!(sim_enb.hardware_type(), Some("d740"));
    assert!(sim_enb
        .services()
        .any(|service| service.command().ends_with("-r SIM_ENB")));
}

#[test]
fn atten_variant_has_the_full_device_complement() {
    let request = topology::build(&params(serde_json::json!({}))).unwrap();

    let nodes: Vec<_> = request.nodes().map(|node| node.client_id()).collect();
    assert_eq!(nodes, ["adb-tgt", "enb1", "enb2", "rue1", "epc"]);

    let rue1 = request.node("rue1").unwrap();
    assert_eq!(rue1.sliver(), SliverKind::Ue);
    assert_eq!(rue1.hardware_type(), Some("nexus5"));
    assert_eq!(rue1.adb_target(), Some("adb-tgt"));

    for id in ["enb1", "enb2"] {
        let enb = request.node(id).unwrap();
        assert_eq!(enb.hardware_type(), Some("nuc5300"));
        assert!(enb.desires().any(|desire| desire.name() == "rf-controlled"));
        assert!(enb
            .services()
            .any(|service| service.command().ends_with("-r ENB")));
    }

    request.emit().unwrap();
}

#[test]
fn atten_variant_pairs_the_ue_with_each_enb_over_rf() {
    let request = topology::build(&params(serde_json::json!({}))).unwrap();

    let rf_links: Vec<_> = request
        .links()
        .filter(|link| link.kind() == LinkKind::Rf)
        .collect();
    assert_eq!(rf_links.len(), 2);

    for (link_id, enb_if, ue_if) in [
        ("rflink1", "enb1:rue1_rf", "rue1:enb1_rf"),
        ("rflink2", "enb2:rue1_rf", "rue1:enb2_rf"),
    ] {
        let link = request.link(link_id).unwrap();
        let members: Vec<_> = link.interfaces().map(|iface| iface.client_id()).collect();
        assert_eq!(members, [enb_if, ue_if]);
    }
}

#[test]
fn atten_variant_joins_each_enb_to_the_epc() {
    let request = topology::build(&params(serde_json::json!({}))).unwrap();

    let lans: Vec<_> = topology_links(&request)
        .into_iter()
        .filter(|link| link.kind() == LinkKind::Lan)
        .collect();
    assert_eq!(lans.len(), 2);

    for lan in lans {
        assert!(lan.link_multiplexing());
        assert!(lan.vlan_tagging());
        assert!(lan.best_effort());
        assert_eq!(lan.interfaces().count(), 2);
        assert!(lan
            .interfaces()
            .any(|iface| iface.client_id().starts_with("epc:")));
    }
}

#[test]
fn fixed_enb_pins_both_enbs_to_the_same_device() {
    let request = topology::build(&params(serde_json::json!({ "FIXED_ENB": "nuc1" }))).unwrap();

    assert_eq!(request.node("enb1").unwrap().component_id(), Some("nuc1"));
    assert_eq!(request.node("enb2").unwrap().component_id(), Some("nuc1"));
    assert_eq!(request.node("rue1").unwrap().component_id(), None);
}

#[test]
fn fixed_ue_pins_the_ue() {
    let request = topology::build(&params(serde_json::json!({ "FIXED_UE": "ue1" }))).unwrap();

    assert_eq!(request.node("rue1").unwrap().component_id(), Some("ue1"));
    assert_eq!(request.node("enb1").unwrap().component_id(), None);
}

#[test]
fn every_oai_node_gets_one_dataset_clone_and_link() {
    let request = topology::build(&params(serde_json::json!({}))).unwrap();

    for id in ["enb1", "enb2", "epc"] {
        let blockstore = request.blockstore(&format!("ds-{id}")).unwrap();
        assert_eq!(blockstore.mount_point(), "/opt/oai");
        assert!(blockstore.rw_clone());

        let link = request.link(&format!("dslink_{id}")).unwrap();
        assert!(link.vlan_tagging());
        assert!(link.best_effort());
        assert!(!link.link_multiplexing());

        let members: Vec<_> = link.interfaces().map(|iface| iface.client_id()).collect();
        assert_eq!(members, [format!("{id}:dsif_{id}"), format!("ds-{id}:if0")]);
    }

    // The ADB target and the UE carry no OAI tree.
    assert!(request.blockstore("ds-adb-tgt").is_none());
    assert!(request.blockstore("ds-rue1").is_none());
}

#[test]
fn sim_variant_clones_the_simulation_dataset() {
    let request = topology::build(&params(serde_json::json!({ "TYPE": "sim" }))).unwrap();

    let sim_ds = request.blockstore("ds-sim-enb").unwrap();
    assert!(sim_ds.dataset().ends_with("dataset+PhantomNet:oai"));

    let epc_ds = request.blockstore("ds-epc").unwrap();
    assert!(epc_ds.dataset().ends_with("ltdataset+oai-develop"));
}

#[test]
fn emitted_documents_carry_the_tour_verbatim() {
    for value in [
        serde_json::json!({ "TYPE": "sim" }),
        serde_json::json!({ "TYPE": "atten" }),
    ] {
        let request = topology::build(&params(value)).unwrap();
        let attached = request.tour().unwrap();
        assert_eq!(attached.description(), tour::DESCRIPTION);
        assert_eq!(attached.instructions(), tour::INSTRUCTIONS);

        let xml = request.emit().unwrap();
        assert!(xml.contains("realize an end-to-end LTE mobile network"));
        assert!(xml.contains("sudo /local/repository/bin/start_oai.pl"));
    }
}
