use thiserror::Error;

pub mod image_ingest;
pub mod notify;
pub mod pass_info;
pub mod scene_archive;

/// Failures of the remote backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The backend responded with status {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
