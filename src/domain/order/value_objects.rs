use std::fmt;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::item::{Currency, Price};
use crate::utils::clock::Clock;
use super::errors::{InvalidOrderItemInput, OrderItemError};
use super::storage::{self, OrderItemRecord};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Days until shipping when the stock covers the ordered amount
pub const SHIPPING_DAYS_IN_STOCK: u64 = 1;

/// Days until shipping when it does not
pub const SHIPPING_DAYS_OUT_OF_STOCK: u64 = 7;

/// One line of an order: the catalog item's id and price as they were when
/// the order was placed, plus the ordered amount and the shipping date.
///
/// Built through [`OrderItemBuilder`] or rehydrated with
/// [`OrderItem::from_storage`]. Nothing changes after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    item_id: String,
    item_price: Price,
    ordered_amount: i32,
    shipping_date: NaiveDate,
}

impl OrderItem {
    pub fn builder() -> OrderItemBuilder {
        OrderItemBuilder::order_item()
    }

    /// Validate the builder's input and snapshot it.
    ///
    /// `clock` is read once, to compute the shipping date.
    pub fn create(builder: OrderItemBuilder, clock: &dyn Clock) -> Result<Self, OrderItemError> {
        let (item_id, item_price) = builder.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected order item input");
            e
        })?;

        let today = clock.today();
        let shipping_date = calculate_shipping_date(
            today,
            builder.ordered_amount,
            builder.available_item_stock,
        )
        .ok_or(OrderItemError::ShippingDateOutOfRange(today))?;

        tracing::debug!(
            item_id = %item_id,
            ordered_amount = builder.ordered_amount,
            available_item_stock = builder.available_item_stock,
            shipping_date = %shipping_date,
            "Built order item"
        );

        Ok(Self {
            item_id: item_id.to_string(),
            item_price,
            ordered_amount: builder.ordered_amount,
            shipping_date,
        })
    }

    /// Rehydrate from the columns embedded in an order row.
    ///
    /// Stored rows are trusted: no business validation runs and the item id
    /// text is kept as-is. Only a row still in its default, unpopulated
    /// state is refused.
    pub fn from_storage(record: OrderItemRecord) -> Result<Self, OrderItemError> {
        let item_id = record
            .item_id
            .ok_or(OrderItemError::UnpopulatedColumn(storage::ITEM_ID))?;
        let amount = record
            .item_price_amount
            .ok_or(OrderItemError::UnpopulatedColumn(storage::ITEM_PRICE_AMOUNT))?;
        let currency = record
            .item_price_currency
            .ok_or(OrderItemError::UnpopulatedColumn(storage::ITEM_PRICE_CURRENCY))?;
        let shipping_date = record
            .shipping_date
            .ok_or(OrderItemError::UnpopulatedColumn(storage::SHIPPING_DATE))?;

        Ok(Self {
            item_id,
            item_price: Price::new(amount, Currency::new(currency)),
            ordered_amount: record.ordered_amount,
            shipping_date,
        })
    }

    pub fn to_record(&self) -> OrderItemRecord {
        OrderItemRecord {
            ordered_amount: self.ordered_amount,
            shipping_date: Some(self.shipping_date),
            item_id: Some(self.item_id.clone()),
            item_price_amount: Some(self.item_price.amount()),
            item_price_currency: Some(self.item_price.currency().as_str().to_string()),
        }
    }

    pub fn item_id(&self) -> Result<Uuid, OrderItemError> {
        Uuid::parse_str(&self.item_id).map_err(|source| OrderItemError::MalformedIdentifier {
            value: self.item_id.clone(),
            source,
        })
    }

    pub fn item_price(&self) -> &Price {
        &self.item_price
    }

    pub fn ordered_amount(&self) -> i32 {
        self.ordered_amount
    }

    pub fn shipping_date(&self) -> NaiveDate {
        self.shipping_date
    }

    /// Item price times ordered amount. Computed on every call.
    pub fn total_price(&self) -> Price {
        self.item_price.times(self.ordered_amount)
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderItem {{ item_id: {}, item_price: {}, ordered_amount: {}, shipping_date: {} }}",
            self.item_id, self.item_price, self.ordered_amount, self.shipping_date
        )
    }
}

/// Next-day shipping when the stock covers the order (an exact match
/// counts), a week otherwise. `None` only past the end of the calendar.
pub fn calculate_shipping_date(
    today: NaiveDate,
    ordered_amount: i32,
    available_item_stock: i32,
) -> Option<NaiveDate> {
    let days = if i64::from(available_item_stock) - i64::from(ordered_amount) >= 0 {
        SHIPPING_DAYS_IN_STOCK
    } else {
        SHIPPING_DAYS_OUT_OF_STOCK
    };

    today.checked_add_days(Days::new(days))
}

// ============================================================================
// Order Item Builder
// ============================================================================

/// Collects the order item's fields. Omitted amounts default to zero.
#[derive(Debug, Clone, Default)]
pub struct OrderItemBuilder {
    item_id: Option<Uuid>,
    item_price: Option<Price>,
    ordered_amount: i32,
    available_item_stock: i32,
}

impl OrderItemBuilder {
    pub fn order_item() -> Self {
        Self::default()
    }

    pub fn with_item_id(mut self, item_id: Uuid) -> Self {
        self.item_id = Some(item_id);
        self
    }

    pub fn with_item_price(mut self, item_price: Price) -> Self {
        self.item_price = Some(item_price);
        self
    }

    pub fn with_ordered_amount(mut self, ordered_amount: i32) -> Self {
        self.ordered_amount = ordered_amount;
        self
    }

    pub fn with_shipping_date_based_on_available_item_stock(mut self, available_item_stock: i32) -> Self {
        self.available_item_stock = available_item_stock;
        self
    }

    pub fn build(self, clock: &dyn Clock) -> Result<OrderItem, OrderItemError> {
        OrderItem::create(self, clock)
    }

    fn validate(&self) -> Result<(Uuid, Price), InvalidOrderItemInput> {
        let item_id = self.item_id.ok_or(InvalidOrderItemInput::MissingItemId)?;
        let item_price = self
            .item_price
            .clone()
            .ok_or(InvalidOrderItemInput::MissingItemPrice)?;

        if item_price.amount() < Decimal::ZERO {
            return Err(InvalidOrderItemInput::NegativePrice(item_price.amount()));
        }
        if self.ordered_amount < 0 {
            return Err(InvalidOrderItemInput::NegativeOrderedAmount(self.ordered_amount));
        }
        if self.available_item_stock < 0 {
            return Err(InvalidOrderItemInput::NegativeAvailableStock(self.available_item_stock));
        }
        if item_price.amount().normalize().scale() > storage::PRICE_SCALE {
            return Err(InvalidOrderItemInput::PriceScaleTooLarge(item_price.amount()));
        }
        // total_price() must never overflow for a built item
        if item_price.checked_times(self.ordered_amount).is_err() {
            return Err(InvalidOrderItemInput::TotalPriceOverflow {
                amount: item_price.amount(),
                ordered_amount: self.ordered_amount,
            });
        }

        Ok((item_id, item_price))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn complete_builder() -> OrderItemBuilder {
        OrderItem::builder()
            .with_item_id(Uuid::new_v4())
            .with_item_price(Price::create(Decimal::new(999, 2)))
            .with_ordered_amount(3)
            .with_shipping_date_based_on_available_item_stock(10)
    }

    #[test]
    fn test_order_item_creation() {
        let item_id = Uuid::new_v4();
        let item = OrderItem::builder()
            .with_item_id(item_id)
            .with_item_price(Price::create(Decimal::new(500, 2)))
            .with_ordered_amount(2)
            .with_shipping_date_based_on_available_item_stock(4)
            .build(&FixedClock(today()))
            .unwrap();

        assert_eq!(item.item_id().unwrap(), item_id);
        assert_eq!(item.item_price(), &Price::create(Decimal::new(500, 2)));
        assert_eq!(item.ordered_amount(), 2);
        assert_eq!(item.shipping_date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_calculate_shipping_date() {
        let next_day = NaiveDate::from_ymd_opt(2024, 1, 2);
        let next_week = NaiveDate::from_ymd_opt(2024, 1, 8);

        assert_eq!(calculate_shipping_date(today(), 0, 0), next_day);
        assert_eq!(calculate_shipping_date(today(), 9, 10), next_day);
        assert_eq!(calculate_shipping_date(today(), 10, 10), next_day);
        assert_eq!(calculate_shipping_date(today(), 11, 10), next_week);
        assert_eq!(calculate_shipping_date(today(), 1, 0), next_week);
    }

    #[test]
    fn test_shipping_date_does_not_overflow_on_extreme_amounts() {
        assert_eq!(
            calculate_shipping_date(today(), i32::MAX, i32::MIN),
            NaiveDate::from_ymd_opt(2024, 1, 8)
        );
        assert_eq!(
            calculate_shipping_date(today(), i32::MIN, i32::MAX),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn test_shipping_date_crosses_month_and_year() {
        let new_years_eve = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

        assert_eq!(
            calculate_shipping_date(new_years_eve, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            calculate_shipping_date(new_years_eve, 2, 1),
            NaiveDate::from_ymd_opt(2024, 1, 7)
        );
    }

    #[test]
    fn test_shipping_date_out_of_range() {
        let result = complete_builder().build(&FixedClock(NaiveDate::MAX));

        assert!(matches!(result, Err(OrderItemError::ShippingDateOutOfRange(d)) if d == NaiveDate::MAX));
    }

    #[test]
    fn test_missing_stock_defaults_to_zero() {
        let item = OrderItem::builder()
            .with_item_id(Uuid::new_v4())
            .with_item_price(Price::create(Decimal::ONE))
            .with_ordered_amount(1)
            .build(&FixedClock(today()))
            .unwrap();

        assert_eq!(item.shipping_date(), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let item = complete_builder()
            .with_ordered_amount(0)
            .build(&FixedClock(today()))
            .unwrap();

        assert_eq!(item.ordered_amount(), 0);
        assert_eq!(item.total_price().amount(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_item_id_is_rejected() {
        let result = OrderItem::builder()
            .with_item_price(Price::create(Decimal::ONE))
            .with_ordered_amount(1)
            .build(&FixedClock(today()));

        assert!(matches!(
            result,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::MissingItemId))
        ));
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result = OrderItem::builder()
            .with_item_id(Uuid::new_v4())
            .with_ordered_amount(1)
            .build(&FixedClock(today()));

        assert!(matches!(
            result,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::MissingItemPrice))
        ));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let clock = FixedClock(today());

        let negative_amount = complete_builder().with_ordered_amount(-1).build(&clock);
        assert!(matches!(
            negative_amount,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::NegativeOrderedAmount(-1)))
        ));

        let negative_stock = complete_builder()
            .with_shipping_date_based_on_available_item_stock(-5)
            .build(&clock);
        assert!(matches!(
            negative_stock,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::NegativeAvailableStock(-5)))
        ));

        let negative_price = complete_builder()
            .with_item_price(Price::create(Decimal::new(-1, 0)))
            .build(&clock);
        assert!(matches!(
            negative_price,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::NegativePrice(_)))
        ));
    }

    #[test]
    fn test_overflowing_total_price_is_rejected() {
        let result = complete_builder()
            .with_item_price(Price::create(Decimal::MAX))
            .with_ordered_amount(2)
            .with_shipping_date_based_on_available_item_stock(5)
            .build(&FixedClock(today()));

        assert!(matches!(
            result,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::TotalPriceOverflow {
                ordered_amount: 2,
                ..
            }))
        ));
    }

    #[test]
    fn test_largest_total_price_is_computed() {
        let item = complete_builder()
            .with_item_price(Price::create(Decimal::MAX))
            .with_ordered_amount(1)
            .build(&FixedClock(today()))
            .unwrap();

        assert_eq!(item.total_price().amount(), Decimal::MAX);
    }

    #[test]
    fn test_price_scale_beyond_storage_is_rejected() {
        let clock = FixedClock(today());

        let result = complete_builder()
            .with_item_price(Price::create(Decimal::new(9999, 3)))
            .build(&clock);
        assert!(matches!(
            result,
            Err(OrderItemError::InvalidInput(InvalidOrderItemInput::PriceScaleTooLarge(_)))
        ));

        // Trailing zeros do not count
        let item = complete_builder()
            .with_item_price(Price::create(Decimal::new(9990, 3)))
            .build(&clock)
            .unwrap();
        assert_eq!(item.item_price().amount(), Decimal::new(999, 2));
    }

    #[test]
    fn test_invalid_input_error_message() {
        let err = complete_builder()
            .with_ordered_amount(-3)
            .build(&FixedClock(today()))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid order item input: ordered amount cannot be negative: -3"
        );
    }

    #[test]
    fn test_total_price() {
        let item = complete_builder().build(&FixedClock(today())).unwrap();

        let total = item.total_price();

        assert_eq!(total.amount(), Decimal::new(2997, 2));
        assert_eq!(total.currency(), &Currency::eur());
        // The unit price is untouched
        assert_eq!(item.item_price().amount(), Decimal::new(999, 2));
    }

    #[test]
    fn test_malformed_identifier() {
        let record = OrderItemRecord {
            item_id: Some("not-a-uuid".to_string()),
            ..complete_builder().build(&FixedClock(today())).unwrap().to_record()
        };
        let item = OrderItem::from_storage(record).unwrap();

        let err = item.item_id().unwrap_err();

        assert!(matches!(&err, OrderItemError::MalformedIdentifier { value, .. } if value == "not-a-uuid"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_order_item_display() {
        let item_id = Uuid::parse_str("6f1c1f3e-2b7a-4c8e-9a43-0d2b5e8f7a10").unwrap();
        let item = complete_builder()
            .with_item_id(item_id)
            .build(&FixedClock(today()))
            .unwrap();

        assert_eq!(
            item.to_string(),
            "OrderItem { item_id: 6f1c1f3e-2b7a-4c8e-9a43-0d2b5e8f7a10, item_price: 9.99 EUR, \
             ordered_amount: 3, shipping_date: 2024-01-02 }"
        );
    }

    #[test]
    fn test_order_item_serialization() {
        let item = complete_builder().build(&FixedClock(today())).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: OrderItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
        assert_eq!(deserialized.shipping_date(), item.shipping_date());
    }
}
