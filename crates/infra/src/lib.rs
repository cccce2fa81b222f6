// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod http;
pub mod random;

pub use http::{DEFAULT_BASE_URL, HttpFetcher, HttpFetcherConfig};
pub use random::ThreadRngSource;
