/// Streams all parts of a manifest into a sink.
pub mod bigfile_reconstructor;

/// A parsed `big_info` manifest.
pub mod manifest;

pub mod manifest_part;

/// Per-chunk checksum and inflate filter shared by all parts.
pub mod part_filter;
