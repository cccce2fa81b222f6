use feedjoin_ports::CollectionFetcher;
use feedjoin_shared_kernel::{InfraResult, Record, Resource};

pub async fn get_albums(fetcher: &dyn CollectionFetcher) -> InfraResult<Vec<Record>> {
    fetcher.fetch(Resource::Albums).await
}

pub async fn get_photos(fetcher: &dyn CollectionFetcher) -> InfraResult<Vec<Record>> {
    fetcher.fetch(Resource::Photos).await
}

pub async fn get_users(fetcher: &dyn CollectionFetcher) -> InfraResult<Vec<Record>> {
    fetcher.fetch(Resource::Users).await
}

pub async fn get_posts(fetcher: &dyn CollectionFetcher) -> InfraResult<Vec<Record>> {
    fetcher.fetch(Resource::Posts).await
}
