//! Table ingestion for rowcheck: CSV loading and cell value coercion.

pub mod csv;
pub mod error;
pub mod value;

pub use csv::read_csv;
pub use error::{IngestError, Result};
pub use value::{any_to_f64, any_to_string, format_numeric, is_null, parse_f64};
