//! Interfaces declared on nodes and the references links store.

/// An interface declared on a node or blockstore.
///
/// The document-wide client id of an interface is `<owner>:<name>`, matching
/// the convention the portal's mapper expects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interface {
    /// The document-wide client id.
    client_id: String,
}

impl Interface {
    /// Creates a new interface scoped to its owning resource.
    pub fn new(owner: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            client_id: format!("{}:{}", owner.as_ref(), name.into()),
        }
    }

    /// Gets the document-wide client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Gets a reference to this interface for use in link membership.
    pub fn reference(&self) -> InterfaceRef {
        InterfaceRef {
            client_id: self.client_id.clone(),
        }
    }
}

/// A reference to a declared interface, stored by links.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceRef {
    /// The client id of the referenced interface.
    client_id: String,
}

impl InterfaceRef {
    /// Creates a reference from a raw client id.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }

    /// Gets the client id of the referenced interface.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}
