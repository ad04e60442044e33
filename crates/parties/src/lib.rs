//! Parties module: the client an invoice is issued to.
//!
//! Only the published identity/display data of a client lives here; how
//! clients are registered or stored is somebody else's concern.

pub mod client;

pub use client::{ClientData, ClientId};
