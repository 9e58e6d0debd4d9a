use thiserror::Error;

/// Error message returned by the backend in a write-response `error` field.
/// Carried through the `anyhow` chain so panels can surface it verbatim while
/// transport failures stay generic.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),
}
