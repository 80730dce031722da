//! An end-to-end LTE mobile network profile built on Open Air Interface.
//!
//! The profile supports two variants: a simulated RAN (UE and eNodeB on one
//! compute node) connected to an EPC, or an off-the-shelf UE (Nexus 5)
//! connected to SDR eNodeBs through a controlled RF attenuator matrix and on
//! to the EPC.
//!
//! The crate is declarative throughout: it binds the portal-supplied
//! parameters, builds the matching [`Request`](swapin::Request), and emits it
//! as an RSpec document. The OAI software stack, the attenuator control
//! plane, and the portal's resource mapper all live elsewhere — this profile
//! only describes parameters for them.

pub mod dataset;
pub mod globals;
pub mod params;
pub mod topology;
pub mod tour;

pub use globals::Globals;
pub use params::Params;
