// tests/integration/end_to_end.rs
use feedjoin::{
    app::execute_with,
    config::Task,
    domain::{Relation, SortOrder},
    shared_kernel::{FeedJoinError, Resource},
    usecase::{get_albums_with_photos, get_photos_sorted_by_title, get_users_with_posts},
};
use serde_json::{Value, json};

use crate::common::{MockFetcher, albums, photos, posts, users};

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|v| v.get("id").and_then(Value::as_u64))
        .collect()
}

#[tokio::test]
async fn albums_with_photos_end_to_end() {
    let fetcher = MockFetcher::new()
        .serving(Resource::Albums, albums())
        .serving(Resource::Photos, photos());

    let result = get_albums_with_photos(&fetcher).await.expect("join succeeds");

    let expected_first = json!({
        "userId": 1,
        "id": 1,
        "title": "quidem molestiae enim",
        "photos": [photos()[0].clone(), photos()[1].clone()]
    });
    assert_eq!(Value::from(result[0].clone()), expected_first);
    assert_eq!(result[2].get("photos"), Some(&json!([photos()[3].clone()])));
    // photo 5 references album 42, which does not exist
    let placed: usize = result
        .iter()
        .map(|album| album.get("photos").and_then(Value::as_array).map_or(0, Vec::len))
        .sum();
    assert_eq!(placed, 4);
}

#[tokio::test]
async fn users_with_posts_end_to_end() {
    let fetcher = MockFetcher::new()
        .serving(Resource::Users, users())
        .serving(Resource::Posts, posts());

    let result = get_users_with_posts(&fetcher).await.expect("join succeeds");

    assert_eq!(result.len(), 2);
    assert_eq!(ids(result[0].get("posts").expect("posts")), vec![1, 2]);
    assert_eq!(ids(result[1].get("posts").expect("posts")), vec![11]);
}

#[tokio::test]
async fn sorted_photos_end_to_end() {
    let fetcher = MockFetcher::new().serving(Resource::Photos, photos());

    let result = get_photos_sorted_by_title(&fetcher).await;

    let lengths: Vec<_> = result.iter().filter_map(|p| p.title()).map(|t| t.encode_utf16().count()).collect();
    assert_eq!(lengths, vec![60, 51, 50, 46, 38]);
}

#[tokio::test]
async fn execute_with_sorted_swallows_failures() {
    let fetcher = MockFetcher::new().with_failure(Resource::Albums, 502);

    let value = execute_with(
        &fetcher,
        Task::Sorted { resource: Resource::Albums, order: SortOrder::Descending },
    )
    .await
    .expect("sorting never fails");

    assert_eq!(value, json!([]));
    assert_eq!(fetcher.calls(), vec![Resource::Albums]);
}

#[tokio::test]
async fn execute_with_join_surfaces_failures() {
    let fetcher = MockFetcher::new()
        .serving(Resource::Users, users())
        .with_failure(Resource::Posts, 503);

    let err = execute_with(&fetcher, Task::Joined(Relation::USERS_WITH_POSTS))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedJoinError::Application(_)));
    assert!(
        err.to_string()
            .ends_with("Failed to fetch users with posts: Something went wrong when fetching posts: HTTP 503")
    );
}

#[tokio::test]
async fn execute_with_fetch_adds_context() {
    let fetcher = MockFetcher::new().with_failure(Resource::Users, 404);

    let err = execute_with(&fetcher, Task::Fetch(Resource::Users)).await.unwrap_err();

    assert!(err.to_string().starts_with("fetching users: "));
}

#[tokio::test]
async fn execute_with_random_month_skips_fetcher() {
    let fetcher = MockFetcher::new();

    let value = execute_with(&fetcher, Task::RandomMonth).await.expect("always succeeds");

    assert!(value.is_string());
    assert!(fetcher.calls().is_empty());
}
