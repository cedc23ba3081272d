//! Error types for seed generation.

/// Alias for `Result<T, EntropyError>`.
pub type EntropyResult<T> = Result<T, EntropyError>;

/// Errors from the platform reads behind a seed.
///
/// Every variant is transient from the caller's point of view: no reading
/// should be produced, and the draw may be retried.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    /// A battery or clock read returned something unusable.
    #[error("entropy unavailable: {0}")]
    Unavailable(String),

    /// The platform read itself failed.
    #[error("entropy unavailable: {0}")]
    Io(#[from] std::io::Error),
}

impl EntropyError {
    /// Whether the caller may try again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) | Self::Io(_) => true,
        }
    }
}
