use std::io::{Read, Write};
use std::net::TcpStream;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};
use log::debug;
use crate::common::common::remaining_budget;
use crate::common::enums::mogile_error::MogileError;
use crate::config::structs::storage_config::StorageConfig;
use crate::network::enums::interest::Interest;
use crate::network::network::{connect_timeout, wait_for};
use crate::network::structs::storage_url::StorageUrl;
use crate::storage::enums::http_method::HttpMethod;
use crate::storage::storage::{parse_response_head, request_head, HEAD_PEEK_SIZE};
use crate::storage::structs::http_body::HttpBody;
use crate::storage::structs::storage_downloader::StorageDownloader;

impl Default for StorageDownloader {
    fn default() -> Self {
        StorageDownloader {
            timeout: Duration::from_secs(5),
        }
    }
}

impl StorageDownloader {
    pub fn new(timeout: Duration) -> StorageDownloader {
        StorageDownloader { timeout }
    }

    pub fn from_config(config: &StorageConfig) -> StorageDownloader {
        StorageDownloader::new(Duration::from_millis(config.get_file_data_timeout_ms))
    }

    /// Opens `url` for reading. The returned body yields exactly
    /// `Content-Length` bytes.
    pub fn get(&self, url: &StorageUrl) -> Result<HttpBody, MogileError> {
        let (mut stream, head_len, content_length) = self.request(url, HttpMethod::Get)?;
        let mut head = vec![0u8; head_len + 4];
        stream.read_exact(&mut head)?;
        debug!("[Storage] GET {} -> {} bytes", url, content_length);
        Ok(HttpBody {
            stream,
            url: url.clone(),
            content_length,
            remaining: content_length,
        })
    }

    /// `Content-Length` of `url` from a `HEAD` request.
    pub fn size(&self, url: &StorageUrl) -> Result<u64, MogileError> {
        let (_stream, _head_len, content_length) = self.request(url, HttpMethod::Head)?;
        Ok(content_length)
    }

    fn request(&self, url: &StorageUrl, method: HttpMethod) -> Result<(TcpStream, usize, u64), MogileError> {
        let started = Instant::now();
        let mut stream = connect_timeout(url.host(), url.port(), self.timeout)?;
        stream.set_nodelay(true)?;
        if !self.timeout.is_zero() {
            stream.set_read_timeout(Some(self.timeout))?;
            stream.set_write_timeout(Some(self.timeout))?;
        }
        stream.write_all(request_head(method, url.request_uri(), None).as_bytes())?;

        let remaining = remaining_budget(started, self.timeout);
        if !wait_for(stream.as_raw_fd(), Interest::Readable, remaining)? {
            return Err(MogileError::Timeout(format!("{} {} not answered within {:?}", method, url, self.timeout)));
        }
        let mut peeked = [0u8; HEAD_PEEK_SIZE];
        let count = stream.peek(&mut peeked)?;
        let (head_len, content_length) = parse_response_head(url.as_str(), &peeked[..count])?;
        Ok((stream, head_len, content_length))
    }
}
