// crates/shared-kernel/src/value_objects/mod.rs
pub mod record;
pub mod resource;

pub use record::Record;
pub use resource::Resource;
