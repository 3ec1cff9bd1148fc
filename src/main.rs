use rust_decimal::Decimal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use order_items::{ClockConfig, OrderItem, Price};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_items=debug"))
        )
        .init();

    let config = ClockConfig::from_env()?;
    tracing::info!("Using time zone {:?}", config.time_zone);
    let clock = config.clock();

    let in_stock = OrderItem::builder()
        .with_item_id(Uuid::new_v4())
        .with_item_price(Price::create(Decimal::new(999, 2)))
        .with_ordered_amount(3)
        .with_shipping_date_based_on_available_item_stock(10)
        .build(&clock)?;

    let backordered = OrderItem::builder()
        .with_item_id(Uuid::new_v4())
        .with_item_price(Price::create(Decimal::new(2450, 2)))
        .with_ordered_amount(6)
        .with_shipping_date_based_on_available_item_stock(5)
        .build(&clock)?;

    for item in [&in_stock, &backordered] {
        tracing::info!("{} -> total {}", item, item.total_price());
    }

    let order_total = in_stock.total_price().add(&backordered.total_price())?;
    tracing::info!("Order total: {}", order_total);

    Ok(())
}
