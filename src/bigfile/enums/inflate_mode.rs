use flate2::write::ZlibDecoder;

/// Whether part data is inflated. Decided once, on the first chunk of the
/// first part, and kept for the rest of the stream.
pub enum InflateMode {
    Undecided,
    PassThrough,
    Inflate(ZlibDecoder<Vec<u8>>),
}
