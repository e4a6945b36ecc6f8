use std::sync::Arc;
use crate::storage::structs::storage_downloader::StorageDownloader;
use crate::tracker::structs::tracker_connection::TrackerConnection;

#[derive(Debug, Clone)]
pub struct TrackerMetadata {
    pub(crate) tracker: Arc<TrackerConnection>,
    /// Used for `HEAD` size probes.
    pub(crate) downloader: StorageDownloader,
}
