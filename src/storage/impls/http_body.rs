use std::io::{self, ErrorKind, Read};
use std::os::fd::{AsRawFd, RawFd};
use crate::network::structs::storage_url::StorageUrl;
use crate::storage::structs::http_body::HttpBody;
use crate::stream::traits::io_ready::IoReady;

impl HttpBody {
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn url(&self) -> &StorageUrl {
        &self.url
    }
}

impl Read for HttpBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let limit = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let read = self.stream.read(&mut buf[..limit])?;
        if read == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("{} ended {} bytes early", self.url, self.remaining),
            ));
        }
        self.remaining -= read as u64;
        Ok(read)
    }
}

impl IoReady for HttpBody {
    fn ready_fd(&self) -> Option<RawFd> {
        Some(self.stream.as_raw_fd())
    }
}
