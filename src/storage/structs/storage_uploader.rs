use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StorageUploader {
    pub connect_timeout: Duration,
    /// Bounds every blocking wait while sending the body and reading the
    /// status line.
    pub timeout: Duration,
    /// Let the kernel coalesce small body writes (`TCP_NODELAY` off) for
    /// the duration of the body.
    pub coalesce: bool,
}
