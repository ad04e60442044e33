use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookkeeper_core::{DomainError, DomainResult, Money, ValueObject};

bookkeeper_core::typed_id!(
    /// Catalog product identifier.
    ProductId
);

/// Product category; tax policies key their rules on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Standard,
    Food,
    Drug,
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ProductType::Standard => "standard",
            ProductType::Food => "food",
            ProductType::Drug => "drug",
        })
    }
}

/// Point-in-time copy of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    id: ProductId,
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ValueObject for ProductSnapshot {}

impl ProductSnapshot {
    /// Validated constructor. The snapshot date is the only optional field.
    pub fn new(
        id: ProductId,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
        snapshot_date: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self {
            id,
            price,
            name,
            product_type,
            snapshot_date,
        })
    }

    pub fn builder() -> ProductSnapshotBuilder {
        ProductSnapshotBuilder::default()
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_date(&self) -> Option<DateTime<Utc>> {
        self.snapshot_date
    }
}

/// Fluent builder for [`ProductSnapshot`].
///
/// `build` fails loudly on the first unset mandatory field instead of
/// defaulting it.
#[derive(Debug, Clone, Default)]
pub struct ProductSnapshotBuilder {
    product_id: Option<ProductId>,
    price: Option<Money>,
    name: Option<String>,
    product_type: Option<ProductType>,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ProductSnapshotBuilder {
    pub fn product_id(mut self, id: ProductId) -> Self {
        self.product_id = Some(id);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn snapshot_date(mut self, snapshot_date: Option<DateTime<Utc>>) -> Self {
        self.snapshot_date = snapshot_date;
        self
    }

    pub fn build(self) -> DomainResult<ProductSnapshot> {
        let id = self
            .product_id
            .ok_or_else(|| DomainError::missing_field("product_id"))?;
        let price = self.price.ok_or_else(|| DomainError::missing_field("price"))?;
        let name = self.name.ok_or_else(|| DomainError::missing_field("name"))?;
        let product_type = self
            .product_type
            .ok_or_else(|| DomainError::missing_field("product_type"))?;

        ProductSnapshot::new(id, price, name, product_type, self.snapshot_date)
    }
}
