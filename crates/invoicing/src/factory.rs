use bookkeeper_core::DomainResult;
use bookkeeper_parties::ClientData;

use crate::invoice::{Invoice, InvoiceId};

/// Source of fresh, empty invoices.
///
/// The issuance engine trusts whatever invoice comes back: it neither checks
/// the identity nor the bound client.
pub trait InvoiceFactory: Send + Sync {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice>;
}

/// Assigns a new time-ordered [`InvoiceId`] to every invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardInvoiceFactory;

impl InvoiceFactory for StandardInvoiceFactory {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice> {
        Ok(Invoice::new(InvoiceId::generate(), client.clone()))
    }
}
