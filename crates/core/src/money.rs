//! Monetary value: an exact amount in minor units plus its currency.
//!
//! Amounts are stored as a signed count of minor units (cents for a
//! two-decimal currency), so equality and arithmetic are exact. Mixing
//! currencies in arithmetic is an invariant violation, never a silent
//! conversion.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Number of minor units in one major unit.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// ISO-4217 style three-letter currency code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    pub const EUR: Currency = Currency(*b"EUR");
    pub const USD: Currency = Currency(*b"USD");
    pub const PLN: Currency = Currency(*b"PLN");

    /// Parse a currency code; exactly three uppercase ASCII letters.
    pub fn new(code: &str) -> DomainResult<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(DomainError::validation(format!(
                "currency code must be three uppercase letters, got {code:?}"
            )));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }

    pub fn code(&self) -> &str {
        // Only ever constructed from ASCII letters.
        core::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::EUR
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

/// Immutable monetary amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units (e.g. cents).
    amount_minor: i64,
    currency: Currency,
}

impl ValueObject for Money {}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Money {
    /// Zero in the default currency. Usable as an accumulator seed for any
    /// currency, since zero adds to any currency (see [`Money::add`]).
    pub const ZERO: Money = Money {
        amount_minor: 0,
        currency: Currency::EUR,
    };

    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Whole major units (e.g. `from_major(10, EUR)` is 10.00 EUR).
    pub fn from_major(units: i64, currency: Currency) -> DomainResult<Self> {
        let minor = units
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Self::new(minor, currency))
    }

    pub fn amount_minor(&self) -> i64 {
        self.amount_minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Sum of two amounts in the same currency.
    ///
    /// A zero operand is currency-neutral: its currency never conflicts.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.common_currency(other, "add")?;
        let amount_minor = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount_minor, currency))
    }

    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.common_currency(other, "subtract")?;
        let amount_minor = self
            .amount_minor
            .checked_sub(other.amount_minor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount_minor, currency))
    }

    pub fn multiply_by(&self, quantity: u32) -> DomainResult<Money> {
        let amount_minor = self
            .amount_minor
            .checked_mul(i64::from(quantity))
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount_minor, self.currency))
    }

    /// `self × basis_points / 10_000`, rounded half away from zero to the
    /// minor unit.
    pub fn scale_basis_points(&self, basis_points: u32) -> DomainResult<Money> {
        let product = i128::from(self.amount_minor) * i128::from(basis_points);
        let half = BASIS_POINTS_PER_UNIT / 2;
        let rounded = if product >= 0 {
            (product + half) / BASIS_POINTS_PER_UNIT
        } else {
            (product - half) / BASIS_POINTS_PER_UNIT
        };
        let amount_minor =
            i64::try_from(rounded).map_err(|_| DomainError::invariant("money amount overflow"))?;
        Ok(Money::new(amount_minor, self.currency))
    }

    fn common_currency(&self, other: &Money, op: &str) -> DomainResult<Currency> {
        if self.currency == other.currency || (self.is_zero() && other.is_zero()) {
            return Ok(self.currency);
        }
        if self.is_zero() {
            return Ok(other.currency);
        }
        if other.is_zero() {
            return Ok(self.currency);
        }
        Err(DomainError::invariant(format!(
            "cannot {op} {} and {}: currency mismatch",
            self.currency, other.currency
        )))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        let per_major = MINOR_UNITS_PER_MAJOR as u64;
        write!(
            f,
            "{sign}{}.{:02} {}",
            abs / per_major,
            abs % per_major,
            self.currency
        )
    }
}
