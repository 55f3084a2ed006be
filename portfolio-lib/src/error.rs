use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("upstream returned HTTP status {0}")]
    Status(u16),

    #[error("could not parse repository listing")]
    Parse(#[source] anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
