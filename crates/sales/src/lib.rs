//! Sales requests: what a client asked to be invoiced for.
//!
//! A request is plain data assembled upstream (priced lines over product
//! snapshots); issuing an invoice for it happens in `bookkeeper-invoicing`.

pub mod request;

pub use request::{InvoiceRequest, RequestLine};
