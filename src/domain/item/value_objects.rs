use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::PriceError;

// ============================================================================
// Item Value Objects
// ============================================================================

/// ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(pub String);

impl Currency {
    pub const EUR: &'static str = "EUR";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn eur() -> Self {
        Self::new(Self::EUR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Price of a catalog item.
///
/// The amount is a `Decimal`, so multiplying by a quantity is exact and the
/// scale of the amount is kept (9.99 x 3 is 29.97, never 29.969999...).
/// Any scale is accepted here; an order item only takes prices with at most
/// two decimal places, the precision of its storage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    amount: Decimal,
    currency: Currency,
}

impl Price {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Price in the catalog's default currency (EUR)
    pub fn create(amount: Decimal) -> Self {
        Self::new(amount, Currency::eur())
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Multiply by a quantity, keeping the currency.
    pub fn checked_times(&self, quantity: i32) -> Result<Price, PriceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency.clone()))
            .ok_or(PriceError::MultiplicationOverflow {
                amount: self.amount,
                quantity,
            })
    }

    /// Multiply by a quantity, keeping the currency.
    ///
    /// # Panics
    ///
    /// When the product exceeds the range of `Decimal` (about 7.9e28).
    pub fn times(&self, quantity: i32) -> Price {
        Self::new(self.amount * Decimal::from(quantity), self.currency.clone())
    }

    pub fn add(&self, other: &Price) -> Result<Price, PriceError> {
        if self.currency != other.currency {
            return Err(PriceError::CurrencyMismatch(
                self.currency.clone(),
                other.currency.clone(),
            ));
        }

        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency.clone()))
            .ok_or(PriceError::AdditionOverflow(self.amount, other.amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
