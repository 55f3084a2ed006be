use crate::error::FeedError;

pub type FeedResult<T> = std::result::Result<T, FeedError>;
