use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("counter target must not be negative, got {0}")]
    NegativeTarget(i64),

    #[error("animation duration must be positive, got {0} ms")]
    NonPositiveDuration(i64),

    #[error("insight catalog has no entries")]
    EmptyCatalog,

    #[error("tag '{0}' is listed in the tag order but has no catalog entry")]
    UnknownTagInOrder(String),

    #[error("tag '{0}' appears more than once")]
    DuplicateTag(String),

    #[error("catalog entry '{0}' is missing from the tag order")]
    UnorderedTag(String),

    #[error("invalid insight catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}
