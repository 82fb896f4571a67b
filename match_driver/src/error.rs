use thiserror::Error;

/// Failures at the driver's host boundary
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("driver must be created inside a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("failed to decode command: {0}")]
    Decode(#[source] postcard::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] postcard::Error),
}
