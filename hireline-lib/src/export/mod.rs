//! Export of the filtered roster

mod csv;

pub use csv::*;
