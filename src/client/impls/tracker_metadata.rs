use std::sync::Arc;
use log::debug;
use crate::client::structs::tracker_metadata::TrackerMetadata;
use crate::client::traits::metadata_source::MetadataSource;
use crate::common::enums::mogile_error::MogileError;
use crate::network::structs::storage_url::StorageUrl;
use crate::storage::structs::storage_downloader::StorageDownloader;
use crate::tracker::structs::param_map::ParamMap;
use crate::tracker::structs::tracker_connection::TrackerConnection;

impl TrackerMetadata {
    pub fn new(tracker: Arc<TrackerConnection>, downloader: StorageDownloader) -> TrackerMetadata {
        TrackerMetadata { tracker, downloader }
    }

    pub fn tracker(&self) -> &Arc<TrackerConnection> {
        &self.tracker
    }
}

/// Collects `<prefix>1..=<count>` values from a tracker response.
pub(crate) fn numbered_values(response: &ParamMap, count_key: &str, prefix: &str) -> Vec<String> {
    let count = response.get_u64(count_key).unwrap_or(0);
    (1..=count)
        .filter_map(|index| response.get_string(&format!("{}{}", prefix, index)))
        .collect()
}

impl MetadataSource for TrackerMetadata {
    fn get_paths(&self, domain: &str, key: &str, noverify: bool, zone: Option<String>) -> Result<Vec<String>, MogileError> {
        let mut params = ParamMap::new()
            .with("domain", domain)
            .with("key", key)
            .with("noverify", if noverify { "1" } else { "0" });
        if let Some(zone) = zone {
            params.insert("zone", zone);
        }
        let response = self.tracker.get_paths(&params)?;
        Ok(numbered_values(&response, "paths", "path"))
    }

    fn list_keys(
        &self,
        domain: &str,
        prefix: &str,
        after: Option<String>,
        limit: u32,
    ) -> Result<Option<(Vec<String>, Option<String>)>, MogileError> {
        let mut params = ParamMap::new()
            .with("domain", domain)
            .with("prefix", prefix)
            .with("limit", limit.to_string());
        if let Some(after) = after {
            params.insert("after", after);
        }
        let response = match self.tracker.list_keys(&params) {
            Ok(response) => response,
            Err(error) if error.is_tracker_error("none_match") => return Ok(None),
            Err(error) => return Err(error),
        };
        let keys = numbered_values(&response, "key_count", "key_");
        Ok(Some((keys, response.get_string("next_after"))))
    }

    fn size(&self, domain: &str, key: &str) -> Result<Option<u64>, MogileError> {
        for path in self.get_paths(domain, key, true, None)? {
            let url = match StorageUrl::parse(&path) {
                Ok(url) => url,
                Err(error) => {
                    debug!("[Client] skipping path: {}", error);
                    continue;
                }
            };
            match self.downloader.size(&url) {
                Ok(size) => return Ok(Some(size)),
                Err(error) => debug!("[Client] HEAD {} failed: {}", url, error),
            }
        }
        Ok(None)
    }

    fn sleep(&self, seconds: u64) -> Result<(), MogileError> {
        self.tracker.sleep(&ParamMap::new().with("duration", seconds.to_string()))?;
        Ok(())
    }
}
