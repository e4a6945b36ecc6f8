pub mod http_body;

/// `GET` and `HEAD` against one storage URL.
pub mod storage_downloader;

/// `PUT` to one destination and ordered failover across a pending file.
pub mod storage_uploader;

pub mod upload_source;
