// Book Record - Catalogued book value type
// Exposes the record entity and its quoting convention for use in tools and tests

pub mod quoted;
pub mod record;

// Re-export commonly used types
pub use quoted::{read_quoted, write_quoted};
pub use record::{ParseRecordError, Record, PRICE_EPSILON};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
