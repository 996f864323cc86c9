use thiserror::Error;

/// Failures that can reach a request handler. A missing post on
/// approve/reject is not one of them: moderation by unknown id is a
/// silent no-op.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("render error: {0}")]
    Render(String),
}
