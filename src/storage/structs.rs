/// One upload target: a device id and its storage URL.
pub mod destination;

/// Body of a `GET` response, limited to `Content-Length`.
pub mod http_body;

/// A `create_open` answer waiting for its upload.
pub mod pending_file;

pub mod storage_downloader;

pub mod storage_uploader;

/// Per-attempt reader over an `UploadSource`.
pub(crate) mod upload_reader;
