use md5::Md5;
use crate::bigfile::enums::inflate_mode::InflateMode;

pub struct PartFilter {
    /// The manifest marks the stream compressed and of type `file`.
    pub(crate) inflate_candidate: bool,
    pub(crate) mode: InflateMode,
    /// Present only while checksums are being verified.
    pub(crate) md5: Option<Md5>,
}
