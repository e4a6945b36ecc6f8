use std::sync::Arc;
use crate::client::traits::metadata_source::MetadataSource;
use crate::config::structs::configuration::Configuration;
use crate::network::structs::liveness_prober::LivenessProber;
use crate::storage::structs::storage_downloader::StorageDownloader;
use crate::storage::structs::storage_uploader::StorageUploader;
use crate::tracker::structs::tracker_connection::TrackerConnection;

pub struct MogileClient {
    pub(crate) config: Configuration,
    pub(crate) domain: String,
    pub(crate) readonly: bool,
    /// `None` when the client runs over an external metadata source.
    pub(crate) tracker: Option<Arc<TrackerConnection>>,
    pub(crate) metadata: Arc<dyn MetadataSource>,
    pub(crate) downloader: StorageDownloader,
    pub(crate) uploader: StorageUploader,
    pub(crate) prober: LivenessProber,
}
