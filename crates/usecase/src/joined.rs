use feedjoin_domain::{Relation, join};
use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{ApplicationError, ApplicationResult, JoinFailureKind, Record};
use futures::{TryFutureExt, future::try_join};
use log::debug;

/// Fetches both sides of a [`Relation`] concurrently and nests the children
/// under their parents.
///
/// Fails closed: if either fetch fails, no partial result is produced and the
/// first failure is reported as [`ApplicationError::JoinFailed`].
pub struct JoinCollections<'a> {
    fetcher: &'a dyn CollectionFetcher,
    relation: Relation,
}

impl<'a> JoinCollections<'a> {
    pub fn new(fetcher: &'a dyn CollectionFetcher, relation: Relation) -> Self {
        Self { fetcher, relation }
    }

    pub async fn run(&self) -> ApplicationResult<Vec<Record>> {
        let Relation { parents, children, .. } = self.relation;
        let failed = |kind: JoinFailureKind| {
            move |source| ApplicationError::JoinFailed { kind, parents, children, source }
        };

        let (parent_records, child_records) = try_join(
            self.fetcher.fetch(parents).map_err(failed(JoinFailureKind::ParentFetchFailed)),
            self.fetcher.fetch(children).map_err(failed(JoinFailureKind::ChildFetchFailed)),
        )
        .await?;

        debug!(
            "joining {} {parents} with {} {children} on {}",
            parent_records.len(),
            child_records.len(),
            self.relation.foreign_key
        );
        Ok(join(parent_records, child_records, &self.relation))
    }
}

pub async fn get_albums_with_photos(fetcher: &dyn CollectionFetcher) -> ApplicationResult<Vec<Record>> {
    JoinCollections::new(fetcher, Relation::ALBUMS_WITH_PHOTOS).run().await
}

pub async fn get_users_with_posts(fetcher: &dyn CollectionFetcher) -> ApplicationResult<Vec<Record>> {
    JoinCollections::new(fetcher, Relation::USERS_WITH_POSTS).run().await
}
