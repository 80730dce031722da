//! The in-memory model of a testbed resource request.
//!
//! A [`Request`] accumulates immutable resource descriptions — nodes, links,
//! remote blockstores, and an optional tour — and performs a single
//! finalization step that serializes the whole document as a GENI RSpec v3
//! `request` element. There is no runtime behavior here: the portal that
//! consumes the emitted document is responsible for mapping the described
//! resources onto actual testbed hardware.

mod emit;
pub mod request;

pub use request::Request;

/// A global error within this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A client id was used for more than one resource in a request.
    #[error("duplicate client id: `{0}`")]
    DuplicateClientId(String),

    /// A link referenced an interface that no node or blockstore declares.
    #[error("unknown interface reference: `{0}`")]
    UnknownInterface(String),

    /// A node or link referenced by client id does not exist in the request.
    #[error("unknown client id: `{0}`")]
    UnknownClientId(String),

    /// A link ended up with fewer than two member interfaces.
    #[error("link `{0}` has fewer than two member interfaces")]
    UnderpopulatedLink(String),

    /// An error while writing the serialized document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The serialized document was not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
