use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Item Storage Mapping
// ============================================================================
//
// Order items are not rows of their own. Their fields are flattened into
// the owning order's row (or its line table), one column per field below.
//
// ============================================================================

pub const ORDERED_AMOUNT: &str = "ordered_amount";
pub const SHIPPING_DATE: &str = "shipping_date";
pub const ITEM_ID: &str = "item_id";
pub const ITEM_PRICE_AMOUNT: &str = "item_price_amount";
pub const ITEM_PRICE_CURRENCY: &str = "item_price_currency";

/// Decimal places kept by `item_price_amount`
pub const PRICE_SCALE: u32 = 2;

/// Column names in declaration order
pub const COLUMNS: [&str; 5] = [
    ORDERED_AMOUNT,
    SHIPPING_DATE,
    ITEM_ID,
    ITEM_PRICE_AMOUNT,
    ITEM_PRICE_CURRENCY,
];

/// Column definitions to splice into the owning table's CREATE TABLE
pub const EMBEDDED_COLUMNS_DDL: &str = "\
ordered_amount INTEGER NOT NULL DEFAULT 0, \
shipping_date DATE, \
item_id VARCHAR(36), \
item_price_amount NUMERIC(19, 2), \
item_price_currency VARCHAR(3)";

/// Raw column values of one order item.
///
/// `OrderItemRecord::default()` is the state a row mapper starts from: zero
/// amount and every other column NULL. It is not an order item; turn it
/// into one with `OrderItem::from_storage` once it has been filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItemRecord {
    pub ordered_amount: i32,
    pub shipping_date: Option<NaiveDate>,
    pub item_id: Option<String>,
    pub item_price_amount: Option<Decimal>,
    pub item_price_currency: Option<String>,
}

impl OrderItemRecord {
    /// True while the record still holds nothing but defaults
    pub fn is_unpopulated(&self) -> bool {
        *self == Self::default()
    }
}
