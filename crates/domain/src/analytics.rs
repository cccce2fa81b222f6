// crates/domain/src/analytics.rs
pub mod join;
pub mod sort;

pub use join::{GroupingIndex, join};
pub use sort::{SortOrder, TitleLengthSort, title_length};
