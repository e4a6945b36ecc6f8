use std::borrow::Cow;
use std::io::Write;
use flate2::write::ZlibDecoder;
use md5::{Digest, Md5};
use crate::bigfile::bigfile::GZIP_HEADER;
use crate::bigfile::enums::inflate_mode::InflateMode;
use crate::bigfile::structs::manifest::Manifest;
use crate::bigfile::structs::part_filter::PartFilter;
use crate::common::enums::mogile_error::MogileError;
use crate::stream::traits::chunk_filter::ChunkFilter;

impl PartFilter {
    pub fn new(manifest: &Manifest, verify: bool) -> PartFilter {
        PartFilter {
            inflate_candidate: manifest.inflates(),
            mode: InflateMode::Undecided,
            md5: verify.then(Md5::new),
        }
    }

    pub fn is_inflating(&self) -> bool {
        matches!(self.mode, InflateMode::Inflate(_))
    }

    pub fn is_verifying(&self) -> bool {
        self.md5.is_some()
    }

    /// Resets the running checksum before a new part.
    pub fn begin_part(&mut self) {
        if let Some(md5) = self.md5.as_mut() {
            md5.reset();
        }
    }

    /// Compares the checksum of the part just copied with `expected`.
    /// Passes when checksums are not being verified.
    pub fn check_part(&mut self, expected: &str) -> Result<(), MogileError> {
        let Some(md5) = self.md5.as_mut() else {
            return Ok(());
        };
        let actual = hex::encode(md5.finalize_reset());
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(MogileError::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
        Ok(())
    }

    /// Remaining inflated output once every part has been copied.
    pub fn finish_stream(&mut self) -> Result<Vec<u8>, MogileError> {
        match &mut self.mode {
            InflateMode::Inflate(decoder) => {
                decoder.try_finish()?;
                Ok(std::mem::take(decoder.get_mut()))
            }
            _ => Ok(Vec::new()),
        }
    }

    fn decide(&mut self, chunk: &[u8]) {
        if self.inflate_candidate && chunk.len() >= 2 && chunk[..2] != GZIP_HEADER {
            self.mode = InflateMode::Inflate(ZlibDecoder::new(Vec::new()));
            // mogtool writes bogus checksums for deflated parts
            self.md5 = None;
        } else {
            self.mode = InflateMode::PassThrough;
        }
    }
}

impl ChunkFilter for PartFilter {
    fn filter<'a>(&mut self, chunk: &'a [u8]) -> Result<Cow<'a, [u8]>, MogileError> {
        if matches!(self.mode, InflateMode::Undecided) {
            self.decide(chunk);
        }
        match &mut self.mode {
            InflateMode::Inflate(decoder) => {
                decoder.write_all(chunk)?;
                Ok(Cow::Owned(std::mem::take(decoder.get_mut())))
            }
            _ => {
                if let Some(md5) = self.md5.as_mut() {
                    md5.update(chunk);
                }
                Ok(Cow::Borrowed(chunk))
            }
        }
    }

    /// End of one part: hands over whatever the decoder produced so far.
    fn finish(&mut self) -> Result<Vec<u8>, MogileError> {
        match &mut self.mode {
            InflateMode::Inflate(decoder) => {
                decoder.flush()?;
                Ok(std::mem::take(decoder.get_mut()))
            }
            _ => Ok(Vec::new()),
        }
    }
}
