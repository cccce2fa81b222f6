//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the fetcher port:
//!
//! - [`sorted`]: Collections ordered by title length, never failing
//! - [`joined`]: Parents with their children attached, failing closed
//! - [`fetch`]: Whole collections as served
//! - [`random_month`]: A month picked by a random source
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod fetch;
pub mod joined;
pub mod random_month;
pub mod sorted;

#[cfg(test)]
mod test_support;

pub use fetch::{get_albums, get_photos, get_posts, get_users};
pub use joined::{JoinCollections, get_albums_with_photos, get_users_with_posts};
pub use random_month::{RandomMonth, get_random_month};
pub use sorted::{SortedByTitle, get_albums_sorted_by_title, get_photos_sorted_by_title};
