use thiserror::Error;

/// Errors produced while retrieving a demo asset.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Wrapper for underlying IO errors (local asset reads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP-level failure with context message.
    #[error("request failed: {0}")]
    Http(String),
}

impl From<String> for FetchError {
    fn from(s: String) -> Self {
        FetchError::Http(s)
    }
}

/// Errors produced while reading the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The platform has no usable clipboard at all.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard exists but reading it was refused or failed.
    #[error("clipboard read failed: {0}")]
    Read(String),
}
