// ============================================================================
// Order Domain - Order line snapshots
// ============================================================================
//
// This module contains the order line value object:
// - Value objects (OrderItem, OrderItemBuilder)
// - Errors (OrderItemError, InvalidOrderItemInput)
// - Storage (OrderItemRecord, the columns embedded in the owning order)
//
// The order aggregate that owns these lines lives elsewhere.
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod storage;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use storage::*;
