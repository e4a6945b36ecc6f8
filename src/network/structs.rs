/// Concurrent `HEAD` race over candidate storage URLs.
pub mod liveness_prober;

/// Parsed `http://host[:port]/path` storage locations.
pub mod storage_url;

/// A single connecting or waiting liveness check.
pub(crate) mod probe;
