//! Read-write clones of the shared OAI datasets.

use swapin::Request;
use swapin::rspec::Result;
use swapin::rspec::request::Link;
use swapin::rspec::request::Node;
use swapin::rspec::request::RemoteBlockstore;

use crate::Globals;

/// Which shared OAI dataset a node clones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OaiDataset {
    /// The OAI development tree.
    Develop,

    /// The tree used by the simulated variant.
    Simulation,
}

impl OaiDataset {
    /// The URN of the dataset.
    pub fn urn(&self) -> &'static str {
        match self {
            OaiDataset::Develop => Globals::OAI_DS,
            OaiDataset::Simulation => Globals::OAI_SIM_DS,
        }
    }
}

/// Attaches a read-write clone of a shared OAI dataset to a node.
///
/// The clone is a remote blockstore mounted at the OAI tree, reached over a
/// dedicated best-effort, VLAN-tagged link. The node gains one `dsif_*`
/// interface; the request gains one blockstore and one `dslink_*` link.
pub fn attach_oai_dataset(
    request: &mut Request,
    node: &mut Node,
    dataset: OaiDataset,
) -> Result<()> {
    let node_if = node.interface(format!("dsif_{}", node.client_id()));

    let blockstore = RemoteBlockstore::builder()
        .name(format!("ds-{}", node.client_id()))
        .mount_point(Globals::OAI_MOUNT)
        .dataset(dataset.urn())
        .rw_clone(true)
        .build();

    let mut link = Link::builder()
        .client_id(format!("dslink_{}", node.client_id()))
        .vlan_tagging(true)
        .best_effort(true)
        .build();
    link.add_interface(node_if);
    link.add_interface(blockstore.interface_ref());

    request.add_blockstore(blockstore)?;
    request.add_link(link)
}
