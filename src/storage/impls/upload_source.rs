use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::os::fd::{AsRawFd, RawFd};
use crate::storage::enums::upload_source::UploadSource;
use crate::storage::structs::upload_reader::UploadReader;
use crate::stream::traits::io_ready::IoReady;

impl UploadSource {
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> UploadSource {
        UploadSource::Bytes(data.into())
    }

    pub fn from_reader<R>(reader: R, length: Option<u64>) -> UploadSource
    where
        R: Read + Seek + Send + 'static,
    {
        UploadSource::Stream {
            reader: Box::new(reader),
            length,
        }
    }

    /// Positions the source at its start and reports the body length.
    pub(crate) fn open(&mut self) -> io::Result<(UploadReader<'_>, u64)> {
        match self {
            UploadSource::Bytes(data) => Ok((UploadReader::Memory(Cursor::new(data.as_slice())), data.len() as u64)),
            UploadSource::File(path) => {
                let file = File::open(path)?;
                let length = file.metadata()?.len();
                Ok((UploadReader::File(file), length))
            }
            UploadSource::Stream { reader, length } => {
                let end = reader.seek(SeekFrom::End(0))?;
                let length = match length {
                    Some(length) if *length < end => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("upload stream holds {} bytes but {} were declared", end, length),
                        ));
                    }
                    Some(length) => *length,
                    None => end,
                };
                reader.seek(SeekFrom::Start(0))?;
                Ok((UploadReader::Stream(reader.as_mut()), length))
            }
        }
    }
}

impl std::fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadSource::Bytes(data) => write!(f, "Bytes({} bytes)", data.len()),
            UploadSource::File(path) => write!(f, "File({})", path.display()),
            UploadSource::Stream { length, .. } => write!(f, "Stream(length: {:?})", length),
        }
    }
}

impl Read for UploadReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            UploadReader::Memory(cursor) => cursor.read(buf),
            UploadReader::File(file) => file.read(buf),
            UploadReader::Stream(reader) => reader.read(buf),
        }
    }
}

impl IoReady for UploadReader<'_> {
    fn ready_fd(&self) -> Option<RawFd> {
        match self {
            UploadReader::File(file) => Some(file.as_raw_fd()),
            _ => None,
        }
    }
}
