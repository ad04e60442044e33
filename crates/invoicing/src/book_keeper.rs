//! Invoice issuance.

use bookkeeper_core::{DomainResult, Entity};
use bookkeeper_sales::InvoiceRequest;

use crate::factory::InvoiceFactory;
use crate::invoice::{Invoice, InvoiceLine};
use crate::tax::TaxPolicy;

/// Issues invoices for sales requests.
///
/// Holds the invoice factory; the tax policy is chosen per call.
#[derive(Debug, Clone)]
pub struct BookKeeper<F> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Build the invoice for `request`.
    ///
    /// The factory is asked for an empty invoice once; then every request
    /// line, in insertion order, is taxed on its total cost and appended as
    /// one invoice line. The first collaborator error aborts issuance and is
    /// returned as-is.
    pub fn issue<P>(&self, request: &InvoiceRequest, tax_policy: &P) -> DomainResult<Invoice>
    where
        P: TaxPolicy + ?Sized,
    {
        let span = tracing::info_span!(
            "issue",
            client_id = %request.client().id(),
            lines = request.len(),
        );
        let _guard = span.enter();

        let mut invoice = self
            .factory
            .create(request.client())
            .inspect_err(|e| tracing::warn!("invoice factory failed: {e}"))?;

        for (index, line) in request.lines().iter().enumerate() {
            let product = line.product();
            let tax = tax_policy
                .calculate_tax(product.product_type(), line.total_cost())
                .inspect_err(|e| {
                    tracing::warn!(line = index, product_id = %product.id(), "tax policy failed: {e}")
                })?;

            tracing::debug!(
                line = index,
                product_id = %product.id(),
                net = %line.total_cost(),
                tax = %tax.amount(),
                "line taxed"
            );

            invoice.add(InvoiceLine::new(line.clone(), tax))?;
        }

        tracing::info!(
            invoice_id = %invoice.id(),
            lines = invoice.lines().len(),
            gross = %invoice.gross(),
            "invoice issued"
        );

        Ok(invoice)
    }
}
