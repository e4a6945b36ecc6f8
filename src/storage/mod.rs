//! Storage node transfers.
//!
//! Storage nodes speak a tiny subset of HTTP/1.0: `PUT` with a
//! `Content-Length` to store, `GET`/`HEAD` to read, and nothing else.
//! Bodies always go through a
//! [`StreamCopier`](crate::stream::structs::stream_copier::StreamCopier).
//!
//! # Main Components
//!
//! - `StorageUploader` - stores a body on the first destination of a
//!   `create_open` answer that accepts it, then commits with `create_close`
//! - `StorageDownloader` - opens a `GET` body or reads a `HEAD` size
//! - `UploadSource` - in-memory bytes, a file path, or a seekable stream
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::storage::enums::upload_source::UploadSource;
//! use mogilefs_client::storage::structs::storage_uploader::StorageUploader;
//!
//! let mut source = UploadSource::Bytes(b"data!".to_vec());
//! let size = StorageUploader::default().store(&tracker, &pending, &mut source)?;
//! ```

/// HTTP method and upload source enumerations.
pub mod enums;

/// Implementation blocks for storage structs.
pub mod impls;

/// Destination, pending file, uploader, downloader and body structures.
pub mod structs;

/// Seekable upload stream trait.
pub mod traits;

/// Status line and response head parsing.
#[allow(clippy::module_inception)]
pub mod storage;
