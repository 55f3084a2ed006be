use crate::error::FeedError;
use crate::feed_client::FeedClient;
use crate::object_model::Repo;

/// Observable states of the projects-page repository feed. A caller renders
/// placeholder content during `Loading`, the listing during `Loaded`, and an
/// error card with a manual retry action during `Failed`.
#[derive(Debug)]
pub enum FeedState {
    Loading,
    Loaded(Vec<Repo>),
    Failed(FeedError),
}

pub struct RepositoryFeed {
    client: FeedClient,
    account: String,
    state: FeedState,
}

impl RepositoryFeed {
    pub fn new(client: FeedClient, account: &str) -> Self {
        Self {
            client,
            account: String::from(account),
            state: FeedState::Loading,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Runs the fetch and settles into `Loaded` or `Failed`. The state is
    /// written once per call; nothing is cached across calls.
    pub async fn load(&mut self) -> &FeedState {
        self.state = FeedState::Loading;
        self.state = match self.client.list_featured_repos(&self.account).await {
            Ok(repos) => FeedState::Loaded(repos),
            Err(e) => FeedState::Failed(e),
        };
        &self.state
    }

    /// Manual retry: the same operation from scratch, no backoff.
    pub async fn retry(&mut self) -> &FeedState {
        self.load().await
    }
}
