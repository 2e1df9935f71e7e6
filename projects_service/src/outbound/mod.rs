pub mod dynamodb;
pub mod s3;

use thiserror::Error;

/// Failure of an AWS-backed store call. The chain of causes is preserved for
/// logging at the domain boundary.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] anyhow::Error);
