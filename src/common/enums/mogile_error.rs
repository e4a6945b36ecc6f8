use thiserror::Error;
use crate::tracker::structs::error_kind::ErrorKind;

#[derive(Debug, Error)]
pub enum MogileError {
    #[error("couldn't connect to mogilefsd backend")]
    UnreachableBackend,

    #[error("request truncated (sent {sent} expected {expected})")]
    RequestTruncated { sent: usize, expected: usize },

    #[error("{0} never became readable")]
    UnreadableSocket(String),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("{kind}: {message}")]
    Tracker { kind: ErrorKind, message: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("No devices available for {0}")]
    NoDevicesAvailable(String),

    #[error("HTTP response status from {url}: {status}")]
    BadResponse { url: String, status: u16 },

    #[error("Unable to read response line from {0}")]
    EmptyResponse(String),

    #[error("Response line from {url} not understood: {line}")]
    UnparseableResponse { url: String, line: String },

    #[error("Checksum mismatch: {actual} != {expected}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("readonly mogilefs")]
    ReadOnly,

    #[error("Empty path for mogile upload")]
    EmptyPath,

    #[error("paths '{0}' returned by backend is not supported")]
    UnsupportedPath(String),

    #[error("Unable to open socket to storage node")]
    NoStorageNodes,

    #[error("must specify at least one host")]
    NoHosts,

    #[error(":hosts must be in 'host:port' form, got '{0}'")]
    InvalidHost(String),

    #[error("Invalid storage URL: {0}")]
    InvalidUrl(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
