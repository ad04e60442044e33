//! Product catalog snapshots.
//!
//! Requests and invoices never look at the live catalog: they carry an
//! immutable [`ProductSnapshot`] taken when the request was built.

pub mod snapshot;

pub use snapshot::{ProductId, ProductSnapshot, ProductSnapshotBuilder, ProductType};
