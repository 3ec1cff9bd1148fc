use rust_decimal::Decimal;

use super::value_objects::Currency;

// ============================================================================
// Price Arithmetic Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("Cannot combine prices in {0} and {1}")]
    CurrencyMismatch(Currency, Currency),

    #[error("Price {amount} multiplied by {quantity} overflows")]
    MultiplicationOverflow { amount: Decimal, quantity: i32 },

    #[error("Sum of {0} and {1} overflows")]
    AdditionOverflow(Decimal, Decimal),
}
