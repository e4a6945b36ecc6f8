pub mod http_method;

/// Where an upload body comes from.
pub mod upload_source;
