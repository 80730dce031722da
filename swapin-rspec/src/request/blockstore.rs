//! Remote blockstore clones of shared datasets.

use bon::Builder;

use crate::request::Interface;
use crate::request::InterfaceRef;

/// A remote blockstore bound to a shared dataset.
///
/// A remote blockstore occupies its own node in the emitted document; the
/// requesting node reaches it over a dedicated link joined to the
/// blockstore's single interface.
#[derive(Builder, Clone, Debug)]
#[builder(builder_type = Builder)]
pub struct RemoteBlockstore {
    /// The name, unique within a request.
    #[builder(into)]
    name: String,

    /// The path the blockstore is mounted at on the consuming node.
    #[builder(into)]
    mount_point: String,

    /// The URN of the dataset the blockstore is bound to.
    #[builder(into)]
    dataset: String,

    /// Whether the blockstore is a read-write clone of the dataset.
    #[builder(default)]
    rw_clone: bool,
}

impl RemoteBlockstore {
    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the mount point.
    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Gets the dataset URN.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Whether the blockstore is a read-write clone.
    pub fn rw_clone(&self) -> bool {
        self.rw_clone
    }

    /// Gets the blockstore's single interface.
    pub fn interface(&self) -> Interface {
        Interface::new(&self.name, "if0")
    }

    /// Gets a link-membership reference to the blockstore's interface.
    pub fn interface_ref(&self) -> InterfaceRef {
        self.interface().reference()
    }
}
