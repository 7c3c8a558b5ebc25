use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The collection refused the write (validation, rules).
    #[error("feed rejected the request: {0}")]
    Rejected(String),

    #[error("feed unavailable: {0}")]
    Unavailable(String),

    #[error("feed subscription closed")]
    SubscriptionClosed,
}

#[derive(Debug, Error)]
pub enum UiPortError {
    #[error("ui channel closed")]
    ChannelClosed,

    #[error("ui port '{0}' already subscribed")]
    AlreadySubscribed(String),

    #[error("failed to encode ui message: {0}")]
    Encode(String),
}
