//! Order line snapshots.
//!
//! An [`OrderItem`] freezes a catalog item's id and price at the moment an
//! order is placed and adds the ordered amount and a shipping date computed
//! from the stock available at that time.

pub mod config;
pub mod domain;
pub mod utils;

pub use config::ClockConfig;
pub use domain::item::{Currency, Price, PriceError};
pub use domain::order::{
    InvalidOrderItemInput, OrderItem, OrderItemBuilder, OrderItemError, OrderItemRecord,
};
pub use utils::clock::{Clock, FixedClock, SystemClock, TimeZoneSetting};
