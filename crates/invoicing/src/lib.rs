//! Invoicing domain module.
//!
//! Turns an [`InvoiceRequest`](bookkeeper_sales::InvoiceRequest) into an
//! [`Invoice`], taxing every line through a pluggable [`TaxPolicy`] and
//! obtaining the empty invoice from an [`InvoiceFactory`]. Pure domain logic:
//! no IO, no HTTP, no storage.

pub mod book_keeper;
pub mod factory;
pub mod invoice;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use factory::{InvoiceFactory, StandardInvoiceFactory};
pub use invoice::{Invoice, InvoiceId, InvoiceLine};
pub use tax::{RateTableConfig, RateTableTaxPolicy, Tax, TaxPolicy, TaxRateEntry};
