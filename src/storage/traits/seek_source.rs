use std::io::{Read, Seek};

pub trait SeekSource: Read + Seek + Send {}

impl<T: Read + Seek + Send> SeekSource for T {}
