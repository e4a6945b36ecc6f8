pub mod mogile_client;

/// `MetadataSource` backed by a tracker connection.
pub mod tracker_metadata;
