use std::fs::File;
use std::io::Cursor;
use crate::storage::traits::seek_source::SeekSource;

pub(crate) enum UploadReader<'a> {
    Memory(Cursor<&'a [u8]>),
    File(File),
    Stream(&'a mut dyn SeekSource),
}
