use thiserror::Error;

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to render document shell: {0}")]
    Template(#[from] askama::Error),
    #[error("Failed to encode style identifiers: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result type for page rendering.
pub type Result<T> = std::result::Result<T, PageError>;
