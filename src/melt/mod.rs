//! Wide-to-long reshaping - unpivot metric columns into attribute/value rows
//!
//! This module converts a wide table into long form: each selected value
//! column of each input row becomes its own output row, carrying the
//! identifier columns unchanged plus the source column's name and value.

pub mod types;
pub mod unpivot;

pub use types::MeltConfig;
pub use unpivot::TableMelter;
