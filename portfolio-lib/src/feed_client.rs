use crate::error::FeedError;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repo;
use crate::result::FeedResult;
use anyhow::anyhow;
use log::Level;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

/// At most this many repos are surfaced on the projects page.
pub const FEED_LIMIT: usize = 12;

pub struct FeedClient {
    url: Url,
    client: ClientWithMiddleware,
}

impl FeedClient {
    pub fn new<U>(url: U) -> FeedResult<Self>
    where
        U: IntoUrl,
    {
        Ok(Self {
            url: url
                .into_url()
                .map_err(|e| FeedError::Other(anyhow!(e)))?,
            client: ClientBuilder::new(Client::new())
                .with(LoggingMiddleware::new(Level::Debug))
                .build(),
        })
    }

    /// Fetches the account's public repo listing, newest-updated first, and
    /// keeps the first [`FEED_LIMIT`] featured entries in upstream order.
    ///
    /// One request covers the whole feed: 50 entries per page against a
    /// display bound of 12, so there is no pagination and no retry.
    pub async fn list_featured_repos(&self, account: &str) -> FeedResult<Vec<Repo>> {
        let url = self
            .url
            .join(&format!("/users/{account}/repos"))
            .map_err(|e| FeedError::Other(anyhow!(e)))?;

        let response = self
            .client
            .get(url)
            .query(&[("sort", "updated"), ("per_page", "50")])
            .header(USER_AGENT, "portfolio-app")
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| FeedError::Other(anyhow!(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Other(anyhow!(e)))?;
        let repos = serde_json::from_str::<Vec<Repo>>(&body).map_err(|e| {
            log::warn!("repository listing did not match the expected shape: {e}");
            FeedError::Parse(anyhow!(e))
        })?;

        Ok(repos
            .into_iter()
            .filter(Repo::is_featured)
            .take(FEED_LIMIT)
            .collect())
    }
}
