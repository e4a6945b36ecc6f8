use std::io::{self, ErrorKind, Read, Write};
use crate::common::enums::mogile_error::MogileError;
use crate::network::enums::interest::Interest;
use crate::stream::structs::wait_budget::WaitBudget;
use crate::stream::traits::io_ready::IoReady;

pub const CHUNK_SIZE: usize = 65536;

/// Writes all of `buf`, looping over short writes and waiting for the sink
/// to become writable again on `EAGAIN`.
pub fn write_full<W>(sink: &mut W, buf: &[u8], budget: &WaitBudget) -> Result<u64, MogileError>
where
    W: Write + IoReady + ?Sized,
{
    let mut written = 0usize;
    while written < buf.len() {
        match sink.write(&buf[written..]) {
            Ok(0) => {
                return Err(io::Error::new(ErrorKind::WriteZero, "sink accepted no bytes").into());
            }
            Ok(count) => written += count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                budget.wait(sink.ready_fd(), Interest::Writable)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(written as u64)
}

/// Reads exactly `size` bytes from `source`.
///
/// `size` usually comes from a remote peer, so the buffer grows with the
/// bytes actually received instead of being allocated up front.
pub fn read_full<R>(source: &mut R, size: usize, budget: &WaitBudget) -> Result<Vec<u8>, MogileError>
where
    R: Read + IoReady + ?Sized,
{
    let mut data = Vec::with_capacity(size.min(CHUNK_SIZE));
    let mut chunk = vec![0u8; size.min(CHUNK_SIZE)];
    while data.len() < size {
        budget.check()?;
        let wanted = (size - data.len()).min(chunk.len());
        match source.read(&mut chunk[..wanted]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!("stream ended after {} of {} bytes", data.len(), size),
                ).into());
            }
            Ok(count) => data.extend_from_slice(&chunk[..count]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                budget.wait(source.ready_fd(), Interest::Readable)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(data)
}
