use std::path::PathBuf;
use crate::storage::traits::seek_source::SeekSource;

/// An upload body that can be replayed from the start for every
/// destination tried.
pub enum UploadSource {
    Bytes(Vec<u8>),
    /// Reopened for every attempt.
    File(PathBuf),
    /// Rewound for every attempt. A missing length is found by seeking to
    /// the end.
    Stream {
        reader: Box<dyn SeekSource>,
        length: Option<u64>,
    },
}
