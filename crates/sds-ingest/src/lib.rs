pub mod csv_text;
pub mod error;

pub use csv_text::{coerce_numeric, parse_dataset};
pub use error::{IngestError, Result};
