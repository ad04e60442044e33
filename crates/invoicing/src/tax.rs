//! Tax policies: how much tax a line of a given product type attracts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use bookkeeper_core::{Currency, DomainError, DomainResult, Money, ValueObject};
use bookkeeper_products::ProductType;

/// Tax computed for one line: the amount plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl ValueObject for Tax {}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Pluggable tax rule.
///
/// Called synchronously once per invoice line, with the line's product type
/// and its total cost. Implementations must be safe to share between threads
/// that issue invoices concurrently.
pub trait TaxPolicy: Send + Sync {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> DomainResult<Tax>;
}

/// One row of a [`RateTableConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateEntry {
    pub product_type: ProductType,
    /// Rate in basis points (2300 = 23%).
    pub basis_points: u32,
    pub label: String,
}

/// Configuration document for [`RateTableTaxPolicy`].
///
/// ```json
/// { "currency": "PLN",
///   "rates": [
///     { "product_type": "standard", "basis_points": 2300, "label": "VAT 23%" },
///     { "product_type": "food", "basis_points": 500, "label": "VAT 5%" }
/// ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableConfig {
    /// Currency of the amounts this table may tax.
    pub currency: Currency,
    pub rates: Vec<TaxRateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaxRate {
    basis_points: u32,
    label: String,
}

/// Table-driven tax policy: a flat rate per product type, in one currency.
#[derive(Debug, Clone, Default)]
pub struct RateTableTaxPolicy {
    currency: Currency,
    rates: HashMap<ProductType, TaxRate>,
}

impl RateTableTaxPolicy {
    pub fn from_config(config: RateTableConfig) -> DomainResult<Self> {
        let mut rates = HashMap::with_capacity(config.rates.len());
        for entry in config.rates {
            if entry.label.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "tax label for {} cannot be empty",
                    entry.product_type
                )));
            }
            let rate = TaxRate {
                basis_points: entry.basis_points,
                label: entry.label,
            };
            if rates.insert(entry.product_type, rate).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate tax rate for {}",
                    entry.product_type
                )));
            }
        }
        Ok(Self {
            currency: config.currency,
            rates,
        })
    }

    /// Parse a JSON [`RateTableConfig`].
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: RateTableConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid tax rate table: {e}")))?;
        Self::from_config(config)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rate_for(&self, product_type: ProductType) -> Option<u32> {
        self.rates.get(&product_type).map(|r| r.basis_points)
    }
}

impl TaxPolicy for RateTableTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> DomainResult<Tax> {
        let rate = self
            .rates
            .get(&product_type)
            .ok_or_else(|| DomainError::not_found(format!("tax rate for {product_type}")))?;
        // Zero is currency-neutral; anything else must match the table.
        if !net.is_zero() && net.currency() != self.currency {
            return Err(DomainError::invariant(format!(
                "tax table in {} cannot tax {net}: currency mismatch",
                self.currency
            )));
        }
        let amount = net.scale_basis_points(rate.basis_points)?;
        Ok(Tax::new(amount, rate.label.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookkeeper_core::Currency;

    const TABLE: &str = r#"{
        "currency": "PLN",
        "rates": [
            { "product_type": "standard", "basis_points": 2300, "label": "VAT 23%" },
            { "product_type": "food", "basis_points": 500, "label": "VAT 5%" },
            { "product_type": "drug", "basis_points": 800, "label": "VAT 8%" }
        ]
    }"#;

    fn pln(minor: i64) -> Money {
        Money::new(minor, Currency::PLN)
    }

    #[test]
    fn applies_rate_of_product_type() {
        let policy = RateTableTaxPolicy::from_json(TABLE).unwrap();

        let tax = policy.calculate_tax(ProductType::Standard, pln(1000)).unwrap();
        assert_eq!(tax.amount(), pln(230));
        assert_eq!(tax.description(), "VAT 23%");

        let tax = policy.calculate_tax(ProductType::Food, pln(1000)).unwrap();
        assert_eq!(tax.amount(), pln(50));
        assert_eq!(tax.description(), "VAT 5%");

        assert_eq!(policy.rate_for(ProductType::Drug), Some(800));
    }

    #[test]
    fn zero_net_yields_zero_tax() {
        let policy = RateTableTaxPolicy::from_json(TABLE).unwrap();
        let tax = policy.calculate_tax(ProductType::Drug, Money::ZERO).unwrap();
        assert!(tax.amount().is_zero());
    }

    #[test]
    fn unknown_product_type_is_not_found() {
        let policy = RateTableTaxPolicy::from_config(RateTableConfig {
            currency: Currency::PLN,
            rates: vec![TaxRateEntry {
                product_type: ProductType::Standard,
                basis_points: 2300,
                label: "VAT 23%".to_string(),
            }],
        })
        .unwrap();

        let err = policy.calculate_tax(ProductType::Food, pln(100)).unwrap_err();
        assert_eq!(err, DomainError::not_found("tax rate for food"));
    }

    #[test]
    fn net_in_another_currency_is_rejected() {
        let policy = RateTableTaxPolicy::from_json(
            r#"{"currency":"EUR","rates":[{"product_type":"standard","basis_points":2300,"label":"VAT 23%"}]}"#,
        )
        .unwrap();
        assert_eq!(policy.currency(), Currency::EUR);

        let err = policy.calculate_tax(ProductType::Standard, pln(1000)).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("currency mismatch") => {}
            other => panic!("Expected currency mismatch, got {other:?}"),
        }

        let tax = policy
            .calculate_tax(ProductType::Standard, Money::new(1000, Currency::EUR))
            .unwrap();
        assert_eq!(tax.amount(), Money::new(230, Currency::EUR));
    }

    #[test]
    fn zero_net_in_any_currency_is_taxed_zero() {
        let policy = RateTableTaxPolicy::from_json(TABLE).unwrap();
        let tax = policy
            .calculate_tax(ProductType::Food, Money::zero(Currency::USD))
            .unwrap();
        assert!(tax.amount().is_zero());
    }

    #[test]
    fn table_without_currency_is_rejected() {
        let err = RateTableTaxPolicy::from_json(r#"{ "rates": [] }"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("currency")));
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        let entry = TaxRateEntry {
            product_type: ProductType::Food,
            basis_points: 500,
            label: "VAT 5%".to_string(),
        };
        let err = RateTableTaxPolicy::from_config(RateTableConfig {
            currency: Currency::PLN,
            rates: vec![entry.clone(), entry],
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = RateTableTaxPolicy::from_json(r#"{ "rates": [ { "product_type": "luxury" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("invalid tax rate table")));
    }
}
