use std::time::Duration;

#[derive(Debug, Clone)]
pub struct StorageDownloader {
    pub timeout: Duration,
}
