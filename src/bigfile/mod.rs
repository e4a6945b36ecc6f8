//! Multi-part ("bigfile") reconstruction.
//!
//! Large files stored by `mogtool` are split into numbered parts plus a
//! text manifest stored under its own key. This module parses the
//! manifest, locates a reachable copy of every part, and streams the parts
//! back in order into one sink, verifying MD5 checksums and inflating raw
//! zlib streams on the way.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut out = std::fs::File::create("restored.tar")?;
//! let (written, manifest) = client.bigfile_write("big_info:backup", &mut out, true)?;
//! assert_eq!(Some(written), manifest.size);
//! ```

/// Decompression decision state.
pub mod enums;

/// Implementation blocks for manifests, filters and the reconstructor.
pub mod impls;

/// Manifest, part, filter and reconstructor structures.
pub mod structs;

/// Manifest parsing.
#[allow(clippy::module_inception)]
pub mod bigfile;
