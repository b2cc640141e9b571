pub mod options;
pub mod processing;
pub mod statistics;
pub mod table;

pub use options::AnalyzeOptions;
pub use processing::{AnalyzeRequest, AnalyzeResponse};
pub use statistics::Statistics;
pub use table::{CellValue, Dataset, Row, TARGET_COLUMN};
