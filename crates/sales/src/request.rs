use serde::{Deserialize, Serialize};

use bookkeeper_core::{DomainError, DomainResult, Money, ValueObject};
use bookkeeper_parties::ClientData;
use bookkeeper_products::ProductSnapshot;

/// One requested product: snapshot, quantity and the line's total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLine {
    product: ProductSnapshot,
    quantity: u32,
    /// Authoritative line total; not recomputed from price and quantity.
    total_cost: Money,
}

impl ValueObject for RequestLine {}

impl RequestLine {
    pub fn new(product: ProductSnapshot, quantity: u32, total_cost: Money) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "request line quantity must be positive",
            ));
        }
        Ok(Self {
            product,
            quantity,
            total_cost,
        })
    }

    /// Line whose total is the snapshot price times `quantity`.
    pub fn priced(product: ProductSnapshot, quantity: u32) -> DomainResult<Self> {
        let total_cost = product.price().multiply_by(quantity)?;
        Self::new(product, quantity, total_cost)
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

/// A client's request to be invoiced, lines kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    lines: Vec<RequestLine>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            lines: Vec::new(),
        }
    }

    /// Append a line at the end of the request.
    pub fn add(&mut self, line: RequestLine) {
        self.lines.push(line);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn lines(&self) -> &[RequestLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
