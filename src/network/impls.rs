/// `LivenessProber` construction and the two-phase race.
pub mod liveness_prober;

/// `StorageUrl` parsing and accessors.
pub mod storage_url;
