use std::io::{ErrorKind, Read, Write};
use std::time::Duration;
use log::trace;
use crate::common::enums::mogile_error::MogileError;
use crate::network::enums::interest::Interest;
use crate::stream::enums::timeout_mode::TimeoutMode;
use crate::stream::stream::{write_full, CHUNK_SIZE};
use crate::stream::structs::stream_copier::StreamCopier;
use crate::stream::structs::wait_budget::WaitBudget;
use crate::stream::traits::chunk_filter::ChunkFilter;
use crate::stream::traits::io_ready::IoReady;

impl Default for StreamCopier {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCopier {
    pub fn new() -> StreamCopier {
        StreamCopier {
            buffer: vec![0u8; CHUNK_SIZE],
            timeout: None,
            timeout_mode: TimeoutMode::PerWait,
        }
    }

    pub fn with_timeout(timeout: Duration, timeout_mode: TimeoutMode) -> StreamCopier {
        StreamCopier {
            buffer: vec![0u8; CHUNK_SIZE],
            timeout: Some(timeout),
            timeout_mode,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn timeout_mode(&self) -> TimeoutMode {
        self.timeout_mode
    }

    /// Copies everything `source` yields into `sink`, returning bytes written.
    pub fn copy<R, W>(&mut self, source: &mut R, sink: &mut W) -> Result<u64, MogileError>
    where
        R: Read + IoReady + ?Sized,
        W: Write + IoReady + ?Sized,
    {
        self.copy_filtered(source, sink, None)
    }

    /// Like [`copy`](Self::copy), passing every chunk through `filter` and
    /// calling its `finish` once the source is exhausted. The count returned
    /// is of bytes written to `sink`, after the transform.
    pub fn copy_filtered<R, W>(
        &mut self,
        source: &mut R,
        sink: &mut W,
        mut filter: Option<&mut dyn ChunkFilter>,
    ) -> Result<u64, MogileError>
    where
        R: Read + IoReady + ?Sized,
        W: Write + IoReady + ?Sized,
    {
        let budget = WaitBudget::new(self.timeout, self.timeout_mode);
        let mut copied = 0u64;
        loop {
            budget.check()?;
            let read = match source.read(&mut self.buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::WouldBlock => {
                    budget.wait(source.ready_fd(), Interest::Readable)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let chunk = &self.buffer[..read];
            copied += match filter.as_mut() {
                Some(filter) => {
                    let output = filter.filter(chunk)?;
                    write_full(sink, &output, &budget)?
                }
                None => write_full(sink, chunk, &budget)?,
            };
        }

        if let Some(filter) = filter {
            let tail = filter.finish()?;
            if !tail.is_empty() {
                copied += write_full(sink, &tail, &budget)?;
            }
        }
        trace!("[Stream] copied {} bytes", copied);
        Ok(copied)
    }
}
