// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each area has its own subdirectory with:
// - Value objects
// - Errors
//
// `item` holds what an order copies from the catalog (the price),
// `order` holds the order line snapshot built from it.
//
// ============================================================================

pub mod item;
pub mod order;
