use thiserror::Error;

/// Failure modes of the project domain.
///
/// Each variant maps onto exactly one error code in the API envelope, so the
/// handlers can stay a mechanical translation layer.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No verified caller identity was supplied.
    #[error("unauthorized")]
    Unauthenticated,

    /// The request payload failed a domain rule.
    #[error("{0}")]
    Validation(String),

    /// The project exists but belongs to a different owner.
    #[error("access denied")]
    Forbidden,

    /// No project with the given id exists anywhere.
    #[error("project not found")]
    NotFound,

    /// A storage or serialization failure. Details are logged, never
    /// surfaced to the caller.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProjectError>;
