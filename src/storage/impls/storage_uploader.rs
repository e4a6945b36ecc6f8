use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::time::Duration;
use log::{debug, warn};
use crate::common::enums::mogile_error::MogileError;
use crate::config::structs::storage_config::StorageConfig;
use crate::network::network::connect_timeout;
use crate::network::structs::storage_url::StorageUrl;
use crate::storage::enums::http_method::HttpMethod;
use crate::storage::enums::upload_source::UploadSource;
use crate::storage::storage::{check_upload_status, request_head};
use crate::storage::structs::destination::Destination;
use crate::storage::structs::pending_file::PendingFile;
use crate::storage::structs::storage_uploader::StorageUploader;
use crate::stream::enums::timeout_mode::TimeoutMode;
use crate::stream::structs::stream_copier::StreamCopier;
use crate::tracker::structs::param_map::ParamMap;
use crate::tracker::structs::tracker_connection::TrackerConnection;

impl Default for StorageUploader {
    fn default() -> Self {
        StorageUploader {
            connect_timeout: Duration::from_secs(3),
            timeout: Duration::from_secs(5),
            coalesce: true,
        }
    }
}

impl StorageUploader {
    pub fn new(timeout: Duration) -> StorageUploader {
        StorageUploader {
            timeout,
            ..StorageUploader::default()
        }
    }

    pub fn from_config(config: &StorageConfig) -> StorageUploader {
        StorageUploader {
            connect_timeout: Duration::from_millis(config.upload_timeout_ms),
            timeout: Duration::from_millis(config.upload_timeout_ms),
            coalesce: config.coalesce_uploads,
        }
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> StorageUploader {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_coalesce(mut self, coalesce: bool) -> StorageUploader {
        self.coalesce = coalesce;
        self
    }

    /// Uploads `source` to `pending`'s destinations in order and commits the
    /// first success with `create_close`. Returns the stored size.
    ///
    /// Destinations that refuse the connection are skipped silently; when
    /// none could even be connected to the result is `NoStorageNodes`,
    /// otherwise the last transfer error is returned.
    pub fn store(
        &self,
        tracker: &TrackerConnection,
        pending: &PendingFile,
        source: &mut UploadSource,
    ) -> Result<u64, MogileError> {
        let mut last_error = None;
        for destination in &pending.destinations {
            let stream = match self.connect(&destination.url) {
                Ok(stream) => stream,
                Err(error) => {
                    warn!("[Storage] cannot connect to {}: {}", destination.url, error);
                    continue;
                }
            };
            match self.transfer(stream, &destination.url, source) {
                Ok(size) => {
                    let params = ParamMap::new()
                        .with("fid", pending.fid.as_str())
                        .with("devid", destination.device_id.as_str())
                        .with("domain", pending.domain.as_str())
                        .with("key", pending.key.as_str())
                        .with("path", destination.url.as_str())
                        .with("size", size.to_string());
                    tracker.create_close(&params)?;
                    debug!("[Storage] stored {} ({} bytes) on device {}", pending.key, size, destination.device_id);
                    return Ok(size);
                }
                Err(error) => {
                    warn!("[Storage] upload to {} failed: {}", destination.url, error);
                    last_error = Some(error);
                }
            }
        }
        Err(last_error.unwrap_or(MogileError::NoStorageNodes))
    }

    /// Uploads `source` to one destination without committing it.
    pub fn put(&self, destination: &Destination, source: &mut UploadSource) -> Result<u64, MogileError> {
        let stream = self.connect(&destination.url)?;
        self.transfer(stream, &destination.url, source)
    }

    fn connect(&self, url: &StorageUrl) -> Result<TcpStream, MogileError> {
        let stream = connect_timeout(url.host(), url.port(), self.connect_timeout)?;
        if !self.timeout.is_zero() {
            stream.set_read_timeout(Some(self.timeout))?;
            stream.set_write_timeout(Some(self.timeout))?;
        }
        Ok(stream)
    }

    fn transfer(&self, mut stream: TcpStream, url: &StorageUrl, source: &mut UploadSource) -> Result<u64, MogileError> {
        let (reader, length) = source.open()?;
        stream.write_all(request_head(HttpMethod::Put, url.request_uri(), Some(length)).as_bytes())?;

        // never send more than the declared Content-Length
        let mut body = reader.take(length);
        stream.set_nodelay(!self.coalesce)?;
        let mut copier = StreamCopier::with_timeout(self.timeout, TimeoutMode::PerWait);
        let sent = copier.copy(&mut body, &mut stream)?;
        stream.set_nodelay(true)?;
        if sent != length {
            return Err(MogileError::RequestTruncated {
                sent: sent as usize,
                expected: length as usize,
            });
        }

        let mut line = String::new();
        BufReader::new(&stream).read_line(&mut line)?;
        let status = check_upload_status(url.as_str(), &line)?;
        debug!("[Storage] PUT {} -> {}", url, status);
        Ok(length)
    }
}
