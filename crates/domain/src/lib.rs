#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod calendar;
pub mod relation;

pub use analytics::{GroupingIndex, SortOrder, TitleLengthSort, join};
pub use calendar::Month;
pub use relation::Relation;
