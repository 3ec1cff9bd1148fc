// ============================================================================
// Item Domain - Catalog values referenced by orders
// ============================================================================
//
// Only the pieces of the catalog item that an order snapshots live here:
// - Value objects (Price, Currency)
// - Errors (PriceError enum)
//
// ============================================================================

pub mod value_objects;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
