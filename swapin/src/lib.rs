//! Swapin.

#[cfg(feature = "portal")]
#[doc(inline)]
pub use swapin_portal as portal;
#[cfg(feature = "portal")]
#[doc(inline)]
pub use swapin_portal::Context;
#[cfg(feature = "rspec")]
#[doc(inline)]
pub use swapin_rspec as rspec;
#[cfg(feature = "rspec")]
#[doc(inline)]
pub use swapin_rspec::Request;
