mod error;
mod feed;
mod feed_client;
mod logging_middleware;
mod object_model;
mod result;

pub use self::error::FeedError;
pub use self::feed::{FeedState, RepositoryFeed};
pub use self::feed_client::{FeedClient, FEED_LIMIT};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::Repo;
pub use self::result::FeedResult;
