/// Reads, writes, listings and bigfile entry points.
pub mod mogile_client;

pub mod tracker_metadata;
