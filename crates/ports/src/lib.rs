//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`fetcher`]: Loading a whole collection from the remote API
//! - [`random`]: Bounded random numbers
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod fetcher;
pub mod random;

pub use fetcher::CollectionFetcher;
pub use random::RandomSource;
