//! Requested links between node interfaces.

use bon::Builder;

use crate::request::InterfaceRef;

/// The kind of link requested.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LinkKind {
    /// An ordinary switched LAN.
    #[default]
    Lan,

    /// A radio-frequency path through the attenuator matrix.
    Rf,
}

/// A requested link.
#[derive(Builder, Clone, Debug)]
#[builder(builder_type = Builder)]
pub struct Link {
    /// The client id, unique within a request.
    #[builder(into)]
    client_id: String,

    /// The kind of link requested.
    #[builder(default)]
    kind: LinkKind,

    /// Whether the link may share a physical interface with other links.
    #[builder(default)]
    link_multiplexing: bool,

    /// Whether traffic on the link is VLAN tagged.
    #[builder(default)]
    vlan_tagging: bool,

    /// Whether the link tolerates best-effort (unshaped) transport.
    #[builder(default)]
    best_effort: bool,

    /// The member interfaces, in the order they joined.
    #[builder(into, default)]
    interfaces: Vec<InterfaceRef>,
}

impl Link {
    /// Gets the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Gets the kind of link requested.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Whether the link may share a physical interface with other links.
    pub fn link_multiplexing(&self) -> bool {
        self.link_multiplexing
    }

    /// Whether traffic on the link is VLAN tagged.
    pub fn vlan_tagging(&self) -> bool {
        self.vlan_tagging
    }

    /// Whether the link tolerates best-effort transport.
    pub fn best_effort(&self) -> bool {
        self.best_effort
    }

    /// Gets the member interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceRef> {
        self.interfaces.iter()
    }

    /// Adds a member interface to the link.
    pub fn add_interface(&mut self, interface: InterfaceRef) {
        self.interfaces.push(interface);
    }
}
