//! Chunked stream copying.
//!
//! The data path of every transfer in this crate goes through a
//! [`StreamCopier`], which moves bytes from a readable stream to a writable
//! one through a single reusable 64 KiB buffer.
//!
//! # Features
//!
//! - Buffer reuse across calls (no per-chunk allocation)
//! - Optional per-chunk transform with an end-of-stream flush
//!   ([`ChunkFilter`]), used for inflating and checksumming
//! - Short-write looping, `EINTR` retry and readiness waits on `EAGAIN`
//! - Optional timeout, per blocking wait or cumulative over the whole copy
//!
//! A timeout never closes the streams involved; that stays with the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::stream::structs::stream_copier::StreamCopier;
//!
//! let mut copier = StreamCopier::new();
//! let copied = copier.copy(&mut body, &mut file)?;
//! ```
//!
//! [`StreamCopier`]: crate::stream::structs::stream_copier::StreamCopier
//! [`ChunkFilter`]: crate::stream::traits::chunk_filter::ChunkFilter

/// Timeout mode enumeration.
pub mod enums;

/// Implementation blocks for the copier and its helpers.
pub mod impls;

/// Copier, wait budget and closure filter structures.
pub mod structs;

/// Chunk filter and readiness traits.
pub mod traits;

/// Free functions: full writes and full reads.
#[allow(clippy::module_inception)]
pub mod stream;
