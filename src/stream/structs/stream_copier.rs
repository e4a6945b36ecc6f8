use std::time::Duration;
use crate::stream::enums::timeout_mode::TimeoutMode;

/// Copies readable streams into writable ones through one reusable buffer.
///
/// The buffer is allocated once, at construction, and is reused by every
/// `copy` call made on the same copier.
#[derive(Debug)]
pub struct StreamCopier {
    pub(crate) buffer: Vec<u8>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) timeout_mode: TimeoutMode,
}
