//! Requested compute and radio nodes.

use bon::Builder;

use crate::request::Execute;
use crate::request::Interface;
use crate::request::InterfaceRef;

/// The kind of sliver a node requests.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SliverKind {
    /// A dedicated raw PC.
    #[default]
    RawPc,

    /// An off-the-shelf user-equipment device.
    Ue,
}

impl SliverKind {
    /// The sliver type name used in the emitted document.
    pub fn name(&self) -> &'static str {
        match self {
            SliverKind::RawPc => "raw-pc",
            SliverKind::Ue => "ue",
        }
    }
}

/// A desired capability tag on a node.
///
/// Desires are soft placement constraints the mapper weighs when choosing
/// physical resources, e.g. `rf-controlled` for devices reachable through
/// the attenuator matrix.
#[derive(Clone, Debug)]
pub struct Desire {
    /// The capability name.
    name: String,

    /// The weight given to the capability during mapping.
    weight: f64,
}

impl Desire {
    /// Creates a new desire with the given name and weight.
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Gets the capability name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the mapping weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A requested node.
#[derive(Builder, Clone, Debug)]
#[builder(builder_type = Builder)]
pub struct Node {
    /// The client id, unique within a request.
    #[builder(into)]
    client_id: String,

    /// The kind of sliver requested.
    #[builder(default)]
    sliver: SliverKind,

    /// The disk image URN to load (if any).
    #[builder(into)]
    disk_image: Option<String>,

    /// The hardware type to map to (if constrained).
    #[builder(into)]
    hardware_type: Option<String>,

    /// A fixed physical component to bind to (if pinned).
    #[builder(into)]
    component_id: Option<String>,

    /// The client id of the node providing out-of-band ADB access.
    ///
    /// Only meaningful for [`SliverKind::Ue`] nodes.
    #[builder(into)]
    adb_target: Option<String>,

    /// The desired capability tags.
    #[builder(into, default)]
    desires: Vec<Desire>,

    /// The startup services to run on the node.
    #[builder(into, default)]
    services: Vec<Execute>,

    /// The declared interfaces, in declaration order.
    #[builder(into, default)]
    interfaces: Vec<Interface>,
}

impl Node {
    /// Gets the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Gets the kind of sliver requested.
    pub fn sliver(&self) -> SliverKind {
        self.sliver
    }

    /// Gets the disk image URN (if any).
    pub fn disk_image(&self) -> Option<&str> {
        self.disk_image.as_deref()
    }

    /// Gets the hardware type constraint (if any).
    pub fn hardware_type(&self) -> Option<&str> {
        self.hardware_type.as_deref()
    }

    /// Gets the bound component id (if pinned).
    pub fn component_id(&self) -> Option<&str> {
        self.component_id.as_deref()
    }

    /// Pins the node to a fixed physical component.
    pub fn bind_component(&mut self, component_id: impl Into<String>) {
        self.component_id = Some(component_id.into());
    }

    /// Gets the ADB access target (if any).
    pub fn adb_target(&self) -> Option<&str> {
        self.adb_target.as_deref()
    }

    /// Gets the desired capability tags.
    pub fn desires(&self) -> impl Iterator<Item = &Desire> {
        self.desires.iter()
    }

    /// Adds a desired capability tag.
    pub fn add_desire(&mut self, desire: Desire) {
        self.desires.push(desire);
    }

    /// Gets the startup services.
    pub fn services(&self) -> impl Iterator<Item = &Execute> {
        self.services.iter()
    }

    /// Adds a startup service.
    pub fn add_service(&mut self, service: Execute) {
        self.services.push(service);
    }

    /// Gets the declared interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.iter()
    }

    /// Declares a named interface on the node and returns its reference.
    pub fn interface(&mut self, name: impl Into<String>) -> InterfaceRef {
        let iface = Interface::new(&self.client_id, name);
        let reference = iface.reference();
        self.interfaces.push(iface);
        reference
    }

    /// Declares the next automatically-named (`if<N>`) interface.
    pub(crate) fn next_interface(&mut self) -> InterfaceRef {
        let name = format!("if{}", self.interfaces.len());
        self.interface(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interfaces_are_scoped_to_the_node() {
        let mut node = Node::builder().client_id("rue1").sliver(SliverKind::Ue).build();

        let rf = node.interface("enb1_rf");
        assert_eq!(rf.client_id(), "rue1:enb1_rf");

        let auto = node.next_interface();
        assert_eq!(auto.client_id(), "rue1:if1");
        assert_eq!(node.interfaces().count(), 2);
    }
}
