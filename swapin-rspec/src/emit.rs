//! Serialization of a [`Request`] as a GENI RSpec v3 document.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;

use crate::Result;
use crate::request::Link;
use crate::request::Node;
use crate::request::RemoteBlockstore;
use crate::request::Request;
use crate::request::Tour;
use crate::request::link::LinkKind;

/// The GENI RSpec v3 namespace.
const GENI_NS: &str = "http://www.geni.net/resources/rspec/3";

/// The Emulab extension namespace.
const EMULAB_NS: &str = "http://www.protogeni.net/resources/rspec/ext/emulab/1";

/// The apt-tour extension namespace.
const TOUR_NS: &str = "http://www.protogeni.net/resources/rspec/ext/apt-tour/1";

/// The sliver type name a remote blockstore occupies.
const BLOCKSTORE_SLIVER: &str = "emulab-blockstore";

/// Writes the full document for a request.
pub(crate) fn write_document<W: Write>(request: &Request, writer: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rspec = BytesStart::new("rspec");
    rspec.push_attribute(("xmlns", GENI_NS));
    rspec.push_attribute(("xmlns:emulab", EMULAB_NS));
    rspec.push_attribute(("type", "request"));
    writer.write_event(Event::Start(rspec))?;

    for node in request.nodes() {
        write_node(&mut writer, node)?;
    }

    for blockstore in request.blockstores() {
        write_blockstore(&mut writer, blockstore)?;
    }

    for link in request.links() {
        write_link(&mut writer, link)?;
    }

    if let Some(tour) = request.tour() {
        write_tour(&mut writer, tour)?;
    }

    writer.write_event(Event::End(BytesEnd::new("rspec")))?;
    Ok(())
}

/// Writes a single requested node.
fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node) -> Result<()> {
    let mut start = BytesStart::new("node");
    start.push_attribute(("client_id", node.client_id()));
    if let Some(component_id) = node.component_id() {
        start.push_attribute(("component_id", component_id));
    }
    start.push_attribute(("exclusive", "true"));
    writer.write_event(Event::Start(start))?;

    let mut sliver = BytesStart::new("sliver_type");
    sliver.push_attribute(("name", node.sliver().name()));
    match node.disk_image() {
        Some(image) => {
            writer.write_event(Event::Start(sliver))?;
            let mut disk = BytesStart::new("disk_image");
            disk.push_attribute(("name", image));
            writer.write_event(Event::Empty(disk))?;
            writer.write_event(Event::End(BytesEnd::new("sliver_type")))?;
        }
        None => writer.write_event(Event::Empty(sliver))?,
    }

    if let Some(hardware_type) = node.hardware_type() {
        let mut hw = BytesStart::new("hardware_type");
        hw.push_attribute(("name", hardware_type));
        writer.write_event(Event::Empty(hw))?;
    }

    if node.services().next().is_some() {
        writer.write_event(Event::Start(BytesStart::new("services")))?;
        for service in node.services() {
            let mut execute = BytesStart::new("execute");
            execute.push_attribute(("shell", service.shell()));
            execute.push_attribute(("command", service.command()));
            writer.write_event(Event::Empty(execute))?;
        }
        writer.write_event(Event::End(BytesEnd::new("services")))?;
    }

    for desire in node.desires() {
        let mut fd = BytesStart::new("emulab:fd");
        fd.push_attribute(("name", desire.name()));
        fd.push_attribute(("weight", desire.weight().to_string().as_str()));
        writer.write_event(Event::Empty(fd))?;
    }

    if let Some(target) = node.adb_target() {
        let mut adb = BytesStart::new("emulab:adb_target");
        adb.push_attribute(("target_id", target));
        writer.write_event(Event::Empty(adb))?;
    }

    for interface in node.interfaces() {
        let mut iface = BytesStart::new("interface");
        iface.push_attribute(("client_id", interface.client_id()));
        writer.write_event(Event::Empty(iface))?;
    }

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}

/// Writes the node a remote blockstore occupies.
fn write_blockstore<W: Write>(writer: &mut Writer<W>, blockstore: &RemoteBlockstore) -> Result<()> {
    let mut start = BytesStart::new("node");
    start.push_attribute(("client_id", blockstore.name()));
    start.push_attribute(("exclusive", "false"));
    writer.write_event(Event::Start(start))?;

    let mut sliver = BytesStart::new("sliver_type");
    sliver.push_attribute(("name", BLOCKSTORE_SLIVER));
    writer.write_event(Event::Start(sliver))?;

    let mut inner = BytesStart::new("emulab:blockstore");
    inner.push_attribute(("name", blockstore.name()));
    inner.push_attribute(("class", "remote"));
    inner.push_attribute(("mountpoint", blockstore.mount_point()));
    inner.push_attribute(("dataset", blockstore.dataset()));
    if blockstore.rw_clone() {
        inner.push_attribute(("rwclone", "true"));
    }
    writer.write_event(Event::Empty(inner))?;
    writer.write_event(Event::End(BytesEnd::new("sliver_type")))?;

    let mut iface = BytesStart::new("interface");
    iface.push_attribute(("client_id", blockstore.interface().client_id()));
    writer.write_event(Event::Empty(iface))?;

    writer.write_event(Event::End(BytesEnd::new("node")))?;
    Ok(())
}

/// Writes a single requested link.
fn write_link<W: Write>(writer: &mut Writer<W>, link: &Link) -> Result<()> {
    let mut start = BytesStart::new("link");
    start.push_attribute(("client_id", link.client_id()));
    writer.write_event(Event::Start(start))?;

    if link.kind() == LinkKind::Rf {
        let mut kind = BytesStart::new("link_type");
        kind.push_attribute(("name", "rf"));
        writer.write_event(Event::Empty(kind))?;
    }

    for interface in link.interfaces() {
        let mut iface = BytesStart::new("interface_ref");
        iface.push_attribute(("client_id", interface.client_id()));
        writer.write_event(Event::Empty(iface))?;
    }

    for (enabled, element) in [
        (link.link_multiplexing(), "emulab:link_multiplexing"),
        (link.vlan_tagging(), "emulab:vlan_tagging"),
        (link.best_effort(), "emulab:best_effort"),
    ] {
        if enabled {
            let mut flag = BytesStart::new(element);
            flag.push_attribute(("enabled", "true"));
            writer.write_event(Event::Empty(flag))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("link")))?;
    Ok(())
}

/// Writes the tour extension block.
fn write_tour<W: Write>(writer: &mut Writer<W>, tour: &Tour) -> Result<()> {
    let mut start = BytesStart::new("rspec_tour");
    start.push_attribute(("xmlns", TOUR_NS));
    writer.write_event(Event::Start(start))?;

    for (element, text) in [
        ("description", tour.description()),
        ("instructions", tour.instructions()),
    ] {
        let mut block = BytesStart::new(element);
        block.push_attribute(("type", "markdown"));
        writer.write_event(Event::Start(block))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(element)))?;
    }

    writer.write_event(Event::End(BytesEnd::new("rspec_tour")))?;
    Ok(())
}
