use feedjoin_domain::{SortOrder, TitleLengthSort};
use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{Record, Resource, Result};
use log::{debug, warn};

/// Fetches a collection and orders it by title length.
///
/// Never fails: any fetch or decoding problem, or a record without a title,
/// yields an empty list. Callers cannot tell that apart from an empty
/// collection.
pub struct SortedByTitle<'a> {
    fetcher: &'a dyn CollectionFetcher,
    resource: Resource,
    sort: TitleLengthSort,
}

impl<'a> SortedByTitle<'a> {
    pub fn new(fetcher: &'a dyn CollectionFetcher, resource: Resource) -> Self {
        Self { fetcher, resource, sort: TitleLengthSort::descending() }
    }

    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.sort = TitleLengthSort::new(order);
        self
    }

    pub async fn run(&self) -> Vec<Record> {
        match self.try_run().await {
            Ok(records) => records,
            Err(err) => {
                warn!("{} unavailable, returning an empty list: {err}", self.resource);
                Vec::new()
            }
        }
    }

    async fn try_run(&self) -> Result<Vec<Record>> {
        let records = self.fetcher.fetch(self.resource).await?;
        debug!("sorting {} {} by title length ({:?})", records.len(), self.resource, self.sort.order());
        Ok(self.sort.sorted(records)?)
    }
}

pub async fn get_albums_sorted_by_title(fetcher: &dyn CollectionFetcher) -> Vec<Record> {
    SortedByTitle::new(fetcher, Resource::Albums).run().await
}

pub async fn get_photos_sorted_by_title(fetcher: &dyn CollectionFetcher) -> Vec<Record> {
    SortedByTitle::new(fetcher, Resource::Photos).run().await
}
