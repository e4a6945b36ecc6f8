use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info};
use crate::bigfile::structs::bigfile_reconstructor::BigfileReconstructor;
use crate::bigfile::structs::manifest::Manifest;
use crate::client::structs::mogile_client::MogileClient;
use crate::client::structs::tracker_metadata::TrackerMetadata;
use crate::client::traits::metadata_source::MetadataSource;
use crate::common::enums::mogile_error::MogileError;
use crate::config::structs::configuration::Configuration;
use crate::network::structs::liveness_prober::LivenessProber;
use crate::network::structs::storage_url::StorageUrl;
use crate::storage::enums::upload_source::UploadSource;
use crate::storage::structs::destination::Destination;
use crate::storage::structs::http_body::HttpBody;
use crate::storage::structs::pending_file::PendingFile;
use crate::storage::structs::storage_downloader::StorageDownloader;
use crate::storage::structs::storage_uploader::StorageUploader;
use crate::stream::enums::timeout_mode::TimeoutMode;
use crate::stream::stream::read_full;
use crate::stream::structs::stream_copier::StreamCopier;
use crate::stream::structs::wait_budget::WaitBudget;
use crate::stream::traits::io_ready::IoReady;
use crate::tracker::structs::param_map::ParamMap;
use crate::tracker::structs::tracker_connection::TrackerConnection;

pub const DEFAULT_LIST_LIMIT: u32 = 1000;

impl MogileClient {
    /// A tracker-backed client for `config.tracker.domain`.
    pub fn new(config: &Configuration) -> Result<MogileClient, MogileError> {
        let tracker = Arc::new(TrackerConnection::from_config(&config.tracker)?);
        let downloader = StorageDownloader::from_config(&config.storage);
        info!("[Client] domain {} on {} tracker host(s)", config.tracker.domain, tracker.hosts().len());
        Ok(MogileClient {
            config: config.clone(),
            domain: config.tracker.domain.clone(),
            readonly: config.tracker.readonly,
            metadata: Arc::new(TrackerMetadata::new(Arc::clone(&tracker), downloader.clone())),
            tracker: Some(tracker),
            downloader,
            uploader: StorageUploader::from_config(&config.storage),
            prober: LivenessProber::from_config(&config.storage),
        })
    }

    /// A read-only client over an external metadata source.
    pub fn with_metadata_source(config: &Configuration, metadata: Arc<dyn MetadataSource>) -> MogileClient {
        MogileClient {
            config: config.clone(),
            domain: config.tracker.domain.clone(),
            readonly: true,
            tracker: None,
            metadata,
            downloader: StorageDownloader::from_config(&config.storage),
            uploader: StorageUploader::from_config(&config.storage),
            prober: LivenessProber::from_config(&config.storage),
        }
    }

    /// Replaces the tracker connection with a fresh one, forgetting dead
    /// hosts and the last error. No-op over an external metadata source.
    pub fn reload(&mut self) -> Result<(), MogileError> {
        if self.tracker.is_none() {
            return Ok(());
        }
        let tracker = Arc::new(TrackerConnection::from_config(&self.config.tracker)?);
        self.metadata = Arc::new(TrackerMetadata::new(Arc::clone(&tracker), self.downloader.clone()));
        self.tracker = Some(tracker);
        debug!("[Client] tracker connection reloaded");
        Ok(())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn readonly(&self) -> bool {
        self.readonly
    }

    pub fn tracker(&self) -> Option<&Arc<TrackerConnection>> {
        self.tracker.as_ref()
    }

    pub fn downloader(&self) -> &StorageDownloader {
        &self.downloader
    }

    pub fn uploader(&self) -> &StorageUploader {
        &self.uploader
    }

    pub fn prober(&self) -> &LivenessProber {
        &self.prober
    }

    /// Tag of the last tracker error.
    pub fn err(&self) -> Option<String> {
        self.tracker.as_ref().and_then(|tracker| tracker.last_error())
    }

    pub fn errstr(&self) -> Option<String> {
        self.tracker.as_ref().and_then(|tracker| tracker.last_error_message())
    }

    fn writable_tracker(&self) -> Result<&TrackerConnection, MogileError> {
        if self.readonly {
            return Err(MogileError::ReadOnly);
        }
        self.tracker.as_deref().ok_or(MogileError::ReadOnly)
    }

    pub fn get_paths(&self, key: &str) -> Result<Vec<String>, MogileError> {
        self.get_paths_with(key, true, None)
    }

    pub fn get_paths_with(&self, key: &str, noverify: bool, zone: Option<&str>) -> Result<Vec<String>, MogileError> {
        self.metadata.get_paths(&self.domain, key, noverify, zone.map(str::to_string))
    }

    /// Opens the first readable replica of `key`.
    fn open_first(&self, key: &str) -> Result<Option<HttpBody>, MogileError> {
        for path in self.get_paths(key)? {
            let url = match StorageUrl::parse(&path) {
                Ok(url) => url,
                Err(error) => {
                    debug!("[Client] skipping path: {}", error);
                    continue;
                }
            };
            match self.downloader.get(&url) {
                Ok(body) => return Ok(Some(body)),
                Err(error) if error.is_retryable_read() => debug!("[Client] GET {} failed: {}", url, error),
                Err(error) => return Err(error),
            }
        }
        Ok(None)
    }

    /// Contents of `key` from the first replica that can be read in full,
    /// `None` when no replica could.
    pub fn get_file_data(&self, key: &str) -> Result<Option<Vec<u8>>, MogileError> {
        for path in self.get_paths(key)? {
            let url = match StorageUrl::parse(&path) {
                Ok(url) => url,
                Err(error) => {
                    debug!("[Client] skipping path: {}", error);
                    continue;
                }
            };
            let budget = WaitBudget::new(Some(self.downloader.timeout), TimeoutMode::Cumulative);
            let data = self.downloader.get(&url).and_then(|mut body| {
                let length = usize::try_from(body.content_length())
                    .map_err(|_| MogileError::InvalidResponse(format!("{}: body too large", url)))?;
                read_full(&mut body, length, &budget)
            });
            match data {
                Ok(data) => return Ok(Some(data)),
                Err(error) if error.is_retryable_read() => debug!("[Client] reading {} failed: {}", url, error),
                Err(error) => return Err(error),
            }
        }
        Ok(None)
    }

    /// Streams `key` into `sink`. Failover only happens before the body
    /// starts flowing.
    pub fn read_file_to<W>(&self, key: &str, sink: &mut W) -> Result<Option<u64>, MogileError>
    where
        W: Write + IoReady + ?Sized,
    {
        let Some(mut body) = self.open_first(key)? else {
            return Ok(None);
        };
        let mut copier = StreamCopier::with_timeout(self.downloader.timeout, TimeoutMode::PerWait);
        Ok(Some(copier.copy(&mut body, sink)?))
    }

    pub fn size(&self, key: &str) -> Result<Option<u64>, MogileError> {
        self.metadata.size(&self.domain, key)
    }

    pub fn list_keys(
        &self,
        prefix: &str,
        after: Option<&str>,
        limit: u32,
    ) -> Result<Option<(Vec<String>, Option<String>)>, MogileError> {
        self.metadata.list_keys(&self.domain, prefix, after.map(str::to_string), limit)
    }

    /// Calls `f` with every key starting with `prefix`, paging through
    /// `list_keys` until it runs dry.
    pub fn each_key<F>(&self, prefix: &str, mut f: F) -> Result<(), MogileError>
    where
        F: FnMut(&str),
    {
        let mut after: Option<String> = None;
        loop {
            let Some((keys, next_after)) = self.list_keys(prefix, after.as_deref(), DEFAULT_LIST_LIMIT)? else {
                return Ok(());
            };
            if keys.is_empty() {
                return Ok(());
            }
            for key in &keys {
                f(key);
            }
            match next_after {
                Some(next) => after = Some(next),
                None => return Ok(()),
            }
        }
    }

    pub fn sleep(&self, seconds: u64) -> Result<(), MogileError> {
        self.metadata.sleep(seconds)
    }

    /// Asks the tracker for a new file under `key` and where to upload it.
    pub fn new_file(&self, key: &str, class: Option<&str>) -> Result<PendingFile, MogileError> {
        let tracker = self.writable_tracker()?;
        let mut params = ParamMap::new()
            .with("domain", self.domain.as_str())
            .with("key", key)
            .with("multi_dest", "1");
        if let Some(class) = class {
            params.insert("class", class);
        }
        let response = tracker.create_open(&params)?;

        let candidates: Vec<(String, String)> = match response.get_u64("dev_count") {
            Some(count) => (1..=count)
                .map(|index| {
                    (
                        response.get_string(&format!("devid_{}", index)).unwrap_or_default(),
                        response.get_string(&format!("path_{}", index)).unwrap_or_default(),
                    )
                })
                .collect(),
            None => vec![(
                response.get_string("devid").unwrap_or_default(),
                response.get_string("path").unwrap_or_default(),
            )],
        };

        match candidates.first() {
            None => return Err(MogileError::EmptyPath),
            Some((_, path)) if path.is_empty() => return Err(MogileError::EmptyPath),
            Some((_, path)) if !path.starts_with("http://") => {
                return Err(MogileError::UnsupportedPath(path.clone()));
            }
            Some(_) => {}
        }

        let destinations = candidates
            .into_iter()
            .map(|(device_id, path)| {
                let url = StorageUrl::parse(&path).map_err(|_| MogileError::UnsupportedPath(path))?;
                Ok(Destination { device_id, url })
            })
            .collect::<Result<Vec<Destination>, MogileError>>()?;

        Ok(PendingFile {
            fid: response.get_string("fid").unwrap_or_default(),
            key: key.to_string(),
            domain: self.domain.clone(),
            class: class.map(str::to_string),
            destinations,
        })
    }

    /// Stores `source` under `key`, returning the stored size.
    pub fn store(&self, key: &str, class: Option<&str>, mut source: UploadSource) -> Result<u64, MogileError> {
        let tracker = self.writable_tracker()?;
        let pending = self.new_file(key, class)?;
        self.uploader.store(tracker, &pending, &mut source)
    }

    pub fn store_content(&self, key: &str, class: Option<&str>, content: impl Into<Vec<u8>>) -> Result<u64, MogileError> {
        self.writable_tracker()?;
        self.store(key, class, UploadSource::Bytes(content.into()))
    }

    pub fn store_file(&self, key: &str, class: Option<&str>, path: impl AsRef<Path>) -> Result<u64, MogileError> {
        self.writable_tracker()?;
        self.store(key, class, UploadSource::File(path.as_ref().to_path_buf()))
    }

    pub fn delete(&self, key: &str) -> Result<(), MogileError> {
        let tracker = self.writable_tracker()?;
        tracker.delete(&ParamMap::new().with("domain", self.domain.as_str()).with("key", key))?;
        Ok(())
    }

    pub fn rename(&self, from: &str, to: &str) -> Result<(), MogileError> {
        let tracker = self.writable_tracker()?;
        tracker.rename(
            &ParamMap::new()
                .with("domain", self.domain.as_str())
                .with("from_key", from)
                .with("to_key", to),
        )?;
        Ok(())
    }

    pub fn bigfile_stat(&self, key: &str) -> Result<Manifest, MogileError> {
        BigfileReconstructor::new(self).stat(key)
    }

    pub fn bigfile_write<W>(&self, key: &str, sink: &mut W, verify: bool) -> Result<(u64, Manifest), MogileError>
    where
        W: Write + IoReady + ?Sized,
    {
        BigfileReconstructor::new(self).write(key, sink, verify)
    }

    pub fn get_file_data_timeout(&self) -> Duration {
        self.downloader.timeout
    }
}
