#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;

pub use feedjoin_domain as domain;
pub use feedjoin_infra as infra;
pub use feedjoin_ports as ports;
pub use feedjoin_shared_kernel as shared_kernel;
pub use feedjoin_usecase as usecase;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
