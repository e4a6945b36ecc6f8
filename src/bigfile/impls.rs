/// Manifest fetch, part location and the write loop.
pub mod bigfile_reconstructor;

pub mod manifest;

/// Inflate decision, checksums and end-of-stream flushing.
pub mod part_filter;
