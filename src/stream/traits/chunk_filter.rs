use std::borrow::Cow;
use crate::common::enums::mogile_error::MogileError;

pub trait ChunkFilter {
    /// Transforms one chunk; the result is what gets written to the sink.
    fn filter<'a>(&mut self, chunk: &'a [u8]) -> Result<Cow<'a, [u8]>, MogileError>;

    /// Called once after the source hit end of stream. Stateful filters
    /// return whatever output they still hold.
    fn finish(&mut self) -> Result<Vec<u8>, MogileError> {
        Ok(Vec::new())
    }
}
