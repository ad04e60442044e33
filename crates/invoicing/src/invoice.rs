use serde::{Deserialize, Serialize};

use bookkeeper_core::{DomainResult, Entity, Money};
use bookkeeper_parties::ClientData;
use bookkeeper_products::ProductSnapshot;
use bookkeeper_sales::RequestLine;

use crate::tax::Tax;

bookkeeper_core::typed_id!(
    /// Invoice identifier, assigned by the [`InvoiceFactory`](crate::InvoiceFactory).
    InvoiceId
);

/// A request line together with the tax computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    request_line: RequestLine,
    tax: Tax,
}

impl InvoiceLine {
    pub fn new(request_line: RequestLine, tax: Tax) -> Self {
        Self { request_line, tax }
    }

    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }

    pub fn product(&self) -> &ProductSnapshot {
        self.request_line.product()
    }

    pub fn quantity(&self) -> u32 {
        self.request_line.quantity()
    }

    /// Line total before tax.
    pub fn net(&self) -> Money {
        self.request_line.total_cost()
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Line total including tax.
    pub fn gross(&self) -> DomainResult<Money> {
        self.net().add(&self.tax.amount())
    }
}

/// Entity: Invoice.
///
/// Created empty by a factory; lines are appended during issuance and the
/// running net/gross totals follow every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    client: ClientData,
    lines: Vec<InvoiceLine>,
    net: Money,
    gross: Money,
}

impl Invoice {
    /// Empty invoice for `client`.
    pub fn new(id: InvoiceId, client: ClientData) -> Self {
        Self {
            id,
            client,
            lines: Vec::new(),
            net: Money::ZERO,
            gross: Money::ZERO,
        }
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn net(&self) -> Money {
        self.net
    }

    pub fn gross(&self) -> Money {
        self.gross
    }

    /// Append a line and fold it into the totals.
    ///
    /// Invariant: all lines share one currency, and the totals carry it from
    /// the first line on. On error the invoice is left unchanged.
    pub fn add(&mut self, line: InvoiceLine) -> DomainResult<()> {
        let (net, gross) = if self.lines.is_empty() {
            let seed = Money::zero(line.net().currency());
            (seed, seed)
        } else {
            (self.net, self.gross)
        };
        let net = net.add(&line.net())?;
        let gross = gross.add(&line.gross()?)?;

        self.lines.push(line);
        self.net = net;
        self.gross = gross;
        Ok(())
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
