use std::borrow::Cow;
use crate::common::enums::mogile_error::MogileError;
use crate::stream::structs::fn_filter::FnFilter;
use crate::stream::traits::chunk_filter::ChunkFilter;

impl<F> ChunkFilter for FnFilter<F>
where
    F: FnMut(Option<&[u8]>) -> Vec<u8>,
{
    fn filter<'a>(&mut self, chunk: &'a [u8]) -> Result<Cow<'a, [u8]>, MogileError> {
        Ok(Cow::Owned((self.0)(Some(chunk))))
    }

    fn finish(&mut self) -> Result<Vec<u8>, MogileError> {
        Ok((self.0)(None))
    }
}
