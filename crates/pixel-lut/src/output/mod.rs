//! Output types for the generator.
//!
//! [`LookupTable`] keeps both the structured statements (for inspection and
//! tests) and their rendered lines (for writing out).

mod lookup_table;

pub use lookup_table::LookupTable;
