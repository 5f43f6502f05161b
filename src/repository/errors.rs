use thiserror::Error;

/// Errors surfaced by catalog repositories.
///
/// The in-memory store can only fail while loading seed data; the variants
/// leave room for backends that can fail at access time as well.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading a seed file from disk failed.
    #[error("failed to read catalog seed: {0}")]
    Io(#[from] std::io::Error),
    /// Seed data was not valid catalog JSON.
    #[error("failed to parse catalog seed: {0}")]
    Seed(#[from] serde_json::Error),
    /// The backing store failed in a backend-specific way.
    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
