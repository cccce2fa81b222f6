// crates/ports/src/fetcher.rs
use async_trait::async_trait;
use feedjoin_shared_kernel::{InfraResult, Record, Resource};

/// Port for loading every record of a collection.
///
/// Implementations fail with an [`InfrastructureError`](feedjoin_shared_kernel::InfrastructureError)
/// whose message is safe to show to a user.
#[async_trait]
pub trait CollectionFetcher: Send + Sync {
    async fn fetch(&self, resource: Resource) -> InfraResult<Vec<Record>>;
}
