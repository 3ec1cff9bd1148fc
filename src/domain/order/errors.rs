use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Order Item Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderItemError {
    /// The stored item id no longer parses. Means corrupted storage, not a
    /// caller mistake.
    #[error("Stored item id is not a valid UUID: {value}")]
    MalformedIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("Invalid order item input: {0}")]
    InvalidInput(#[from] InvalidOrderItemInput),

    #[error("Order item column {0} is NULL")]
    UnpopulatedColumn(&'static str),

    #[error("Shipping date out of range for order placed on {0}")]
    ShippingDateOutOfRange(NaiveDate),
}

/// Builder input rejected at build time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrderItemInput {
    #[error("item id is missing")]
    MissingItemId,

    #[error("item price is missing")]
    MissingItemPrice,

    #[error("item price cannot be negative: {0}")]
    NegativePrice(Decimal),

    #[error("ordered amount cannot be negative: {0}")]
    NegativeOrderedAmount(i32),

    #[error("available item stock cannot be negative: {0}")]
    NegativeAvailableStock(i32),

    #[error("item price {0} has more than 2 decimal places")]
    PriceScaleTooLarge(Decimal),

    #[error("total price of {ordered_amount} x {amount} overflows")]
    TotalPriceOverflow { amount: Decimal, ordered_amount: i32 },
}
