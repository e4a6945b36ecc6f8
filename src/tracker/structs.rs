/// Mutable per-connection state guarded by the connection lock.
pub mod connection_state;

/// A registered tracker error tag.
pub mod error_kind;

/// Tag to `ErrorKind` registry.
pub mod error_registry;

/// Ordered byte-string parameter map.
pub mod param_map;

/// The tracker client itself.
pub mod tracker_connection;

/// A `host:port` tracker address.
pub mod tracker_host;
