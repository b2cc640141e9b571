pub mod clean;
pub mod normalize;
pub mod sort;
pub mod summary;

pub use clean::drop_missing;
pub use normalize::normalize_target;
pub use sort::sort_descending;
pub use summary::{population_moments, summarize};
