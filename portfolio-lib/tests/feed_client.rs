use portfolio_lib::{FeedClient, FeedError, FeedState, RepositoryFeed, FEED_LIMIT};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "armand0e";

fn listing_entry(id: i64, name: &str, stars: u32, description: Value) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": description,
        "html_url": format!("https://github.com/{ACCOUNT}/{name}"),
        "language": "Rust",
        "stargazers_count": stars,
        "forks_count": 0,
        "updated_at": "2025-06-01T00:00:00Z",
        "topics": ["portfolio"],
        "private": false,
        "fork": false
    })
}

async fn mount_listing(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{ACCOUNT}/repos")))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn truncates_full_page_to_limit_in_upstream_order() {
    let server = MockServer::start().await;
    let listing = (0..50)
        .map(|i| listing_entry(i, &format!("repo-{i}"), 1, Value::Null))
        .collect::<Vec<_>>();
    mount_listing(&server, Value::Array(listing)).await;

    let client = FeedClient::new(server.uri()).expect("client should build");
    let repos = client
        .list_featured_repos(ACCOUNT)
        .await
        .expect("listing should succeed");

    assert_eq!(repos.len(), FEED_LIMIT);
    for (i, repo) in repos.iter().enumerate() {
        assert_eq!(repo.name, format!("repo-{i}"));
    }
}

#[tokio::test]
async fn drops_private_forked_and_unqualified_entries() {
    let server = MockServer::start().await;
    let mut starred_private = listing_entry(1, "starred-private", 10, json!("A tool"));
    starred_private["private"] = json!(true);
    let mut starred_fork = listing_entry(2, "starred-fork", 10, json!("A tool"));
    starred_fork["fork"] = json!(true);
    let listing = json!([
        starred_private,
        starred_fork,
        listing_entry(3, "bare", 0, Value::Null),
        listing_entry(4, "blank-description", 0, json!("   ")),
        listing_entry(5, "described", 0, json!("A tool")),
        listing_entry(6, "starred", 5, json!("")),
    ]);
    mount_listing(&server, listing).await;

    let client = FeedClient::new(server.uri()).expect("client should build");
    let repos = client
        .list_featured_repos(ACCOUNT)
        .await
        .expect("listing should succeed");

    let names = repos.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["described", "starred"]);
}

#[tokio::test]
async fn non_success_status_fails_with_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{ACCOUNT}/repos")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).expect("client should build");
    let error = client
        .list_featured_repos(ACCOUNT)
        .await
        .expect_err("listing should fail");

    assert!(matches!(error, FeedError::Status(500)));
}

#[tokio::test]
async fn malformed_body_fails_with_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{ACCOUNT}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "moved"})))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).expect("client should build");
    let error = client
        .list_featured_repos(ACCOUNT)
        .await
        .expect_err("listing should fail");

    assert!(matches!(error, FeedError::Parse(_)));
}

#[tokio::test]
async fn unreachable_upstream_fails_without_panicking() {
    // A dedicated (non-pooled) server so dropping it actually closes the port;
    // pooled servers from `MockServer::start` keep listening after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = FeedClient::new(uri).expect("client should build");
    let error = client
        .list_featured_repos(ACCOUNT)
        .await
        .expect_err("listing should fail");

    assert!(matches!(error, FeedError::Other(_)));
}

#[tokio::test]
async fn feed_settles_to_failed_then_loaded_on_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{ACCOUNT}/repos")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = FeedClient::new(server.uri()).expect("client should build");
    let mut feed = RepositoryFeed::new(client, ACCOUNT);
    assert!(matches!(feed.state(), FeedState::Loading));
    assert!(matches!(
        feed.load().await,
        FeedState::Failed(FeedError::Status(503))
    ));

    server.reset().await;
    mount_listing(&server, json!([listing_entry(1, "repo-1", 2, Value::Null)])).await;

    match feed.retry().await {
        FeedState::Loaded(repos) => assert_eq!(repos.len(), 1),
        other => panic!("expected loaded feed, got {other:?}"),
    }
}
