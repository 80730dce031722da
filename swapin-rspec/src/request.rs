//! Resource requests and the value objects they accumulate.

use indexmap::IndexMap;
use tracing::debug;

pub mod blockstore;
pub mod execute;
pub mod interface;
pub mod link;
pub mod node;
pub mod tour;

pub use blockstore::RemoteBlockstore;
pub use execute::Execute;
pub use interface::Interface;
pub use interface::InterfaceRef;
pub use link::Link;
pub use node::Node;
pub use tour::Tour;

use crate::Error;
use crate::Result;
use crate::emit;

/// An in-memory resource request.
///
/// Resources are held in insertion order so that the emitted document lists
/// them in the order the profile declared them.
#[derive(Clone, Debug, Default)]
pub struct Request {
    /// The requested nodes, keyed by client id.
    nodes: IndexMap<String, Node>,

    /// The requested links, keyed by client id.
    links: IndexMap<String, Link>,

    /// The requested remote blockstores, keyed by name.
    blockstores: IndexMap<String, RemoteBlockstore>,

    /// The tour attached to the request (if any).
    tour: Option<Tour>,
}

impl Request {
    /// Creates a new, empty [`Request`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a [`Node`] to the request.
    ///
    /// Returns an error if the node's client id is already taken by any
    /// resource in the request.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        self.assert_fresh(node.client_id())?;
        debug!("adding node `{}` to the request", node.client_id());
        self.nodes.insert(node.client_id().to_owned(), node);
        Ok(())
    }

    /// Adds a [`Link`] to the request.
    ///
    /// Returns an error if the link's client id is already taken by any
    /// resource in the request.
    pub fn add_link(&mut self, link: Link) -> Result<()> {
        self.assert_fresh(link.client_id())?;
        debug!("adding link `{}` to the request", link.client_id());
        self.links.insert(link.client_id().to_owned(), link);
        Ok(())
    }

    /// Adds a [`RemoteBlockstore`] to the request.
    ///
    /// Returns an error if the blockstore's name is already taken by any
    /// resource in the request.
    pub fn add_blockstore(&mut self, blockstore: RemoteBlockstore) -> Result<()> {
        self.assert_fresh(blockstore.name())?;
        debug!("adding blockstore `{}` to the request", blockstore.name());
        self.blockstores
            .insert(blockstore.name().to_owned(), blockstore);
        Ok(())
    }

    /// Attaches a [`Tour`] to the request, replacing any previous tour.
    pub fn set_tour(&mut self, tour: Tour) {
        self.tour = Some(tour);
    }

    /// Joins a node to a link that is already part of the request.
    ///
    /// A fresh interface is created on the node and its reference is added to
    /// the link's members. The created reference is returned.
    pub fn connect(&mut self, link_id: &str, node_id: &str) -> Result<InterfaceRef> {
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| Error::UnknownClientId(node_id.to_owned()))?;
        let iface = node.next_interface();

        let link = self
            .links
            .get_mut(link_id)
            .ok_or_else(|| Error::UnknownClientId(link_id.to_owned()))?;
        link.add_interface(iface.clone());

        Ok(iface)
    }

    /// Gets a node by client id.
    pub fn node(&self, client_id: &str) -> Option<&Node> {
        self.nodes.get(client_id)
    }

    /// Gets a link by client id.
    pub fn link(&self, client_id: &str) -> Option<&Link> {
        self.links.get(client_id)
    }

    /// Gets a blockstore by name.
    pub fn blockstore(&self, name: &str) -> Option<&RemoteBlockstore> {
        self.blockstores.get(name)
    }

    /// Gets the nodes in the request, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Gets the links in the request, in declaration order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    /// Gets the blockstores in the request, in declaration order.
    pub fn blockstores(&self) -> impl Iterator<Item = &RemoteBlockstore> {
        self.blockstores.values()
    }

    /// Gets the attached tour (if any).
    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    /// Checks the structural invariants of the request.
    ///
    /// Every link must contain at least two member interfaces, and every
    /// member interface must be declared by some node or blockstore.
    pub fn validate(&self) -> Result<()> {
        let mut declared = std::collections::HashSet::new();
        for node in self.nodes.values() {
            for iface in node.interfaces() {
                declared.insert(iface.client_id().to_owned());
            }
        }
        for blockstore in self.blockstores.values() {
            declared.insert(blockstore.interface().client_id().to_owned());
        }

        for link in self.links.values() {
            if link.interfaces().count() < 2 {
                return Err(Error::UnderpopulatedLink(link.client_id().to_owned()));
            }

            for iface in link.interfaces() {
                if !declared.contains(iface.client_id()) {
                    return Err(Error::UnknownInterface(iface.client_id().to_owned()));
                }
            }
        }

        Ok(())
    }

    /// Serializes the request as a GENI RSpec v3 `request` document.
    ///
    /// The request is validated first; see [`validate()`](Request::validate).
    pub fn emit(&self) -> Result<String> {
        self.validate()?;

        let mut buffer = Vec::new();
        emit::write_document(self, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Serializes the request into the given writer.
    ///
    /// The request is validated first; see [`validate()`](Request::validate).
    pub fn write_xml<W: std::io::Write>(&self, writer: W) -> Result<()> {
        self.validate()?;
        emit::write_document(self, writer)
    }

    /// Ensures a client id is not yet used by any resource in the request.
    fn assert_fresh(&self, client_id: &str) -> Result<()> {
        if self.nodes.contains_key(client_id)
            || self.links.contains_key(client_id)
            || self.blockstores.contains_key(client_id)
        {
            return Err(Error::DuplicateClientId(client_id.to_owned()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::node::SliverKind;

    /// A raw PC with no configuration beyond its client id.
    fn bare_node(client_id: &str) -> Node {
        Node::builder()
            .client_id(client_id)
            .sliver(SliverKind::RawPc)
            .build()
    }

    #[test]
    fn duplicate_client_ids_are_rejected() {
        let mut request = Request::new();
        request.add_node(bare_node("epc")).unwrap();

        let err = request.add_node(bare_node("epc")).unwrap_err();
        assert!(matches!(err, Error::DuplicateClientId(id) if id == "epc"));

        let link = Link::builder().client_id("epc").build();
        let err = request.add_link(link).unwrap_err();
        assert!(matches!(err, Error::DuplicateClientId(id) if id == "epc"));
    }

    #[test]
    fn connect_creates_one_interface_per_call() {
        let mut request = Request::new();
        request.add_node(bare_node("epc")).unwrap();
        request.add_node(bare_node("enb1")).unwrap();
        request
            .add_link(Link::builder().client_id("s1-lan1").build())
            .unwrap();

        let a = request.connect("s1-lan1", "enb1").unwrap();
        let b = request.connect("s1-lan1", "epc").unwrap();
        assert_eq!(a.client_id(), "enb1:if0");
        assert_eq!(b.client_id(), "epc:if0");

        let link = request.link("s1-lan1").unwrap();
        assert_eq!(link.interfaces().count(), 2);
    }

    #[test]
    fn underpopulated_links_fail_validation() {
        let mut request = Request::new();
        request.add_node(bare_node("epc")).unwrap();
        request
            .add_link(Link::builder().client_id("s1-lan1").build())
            .unwrap();
        request.connect("s1-lan1", "epc").unwrap();

        let err = request.validate().unwrap_err();
        assert!(matches!(err, Error::UnderpopulatedLink(id) if id == "s1-lan1"));
    }

    #[test]
    fn dangling_interface_refs_fail_validation() {
        let mut request = Request::new();
        request.add_node(bare_node("epc")).unwrap();
        request.add_node(bare_node("enb1")).unwrap();

        let mut link = Link::builder().client_id("s1-lan1").build();
        link.add_interface(InterfaceRef::new("enb1:rf0"));
        link.add_interface(InterfaceRef::new("epc:if0"));
        request.add_link(link).unwrap();

        let err = request.validate().unwrap_err();
        assert!(matches!(err, Error::UnknownInterface(id) if id == "enb1:rf0"));
    }
}
