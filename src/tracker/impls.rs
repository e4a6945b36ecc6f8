pub mod connection_state;

/// Equality, display and CamelCase names for error kinds.
pub mod error_kind;

/// Lookup and registration of error tags.
pub mod error_registry;

pub mod param_map;

/// Request cycle, host selection and generated command methods.
pub mod tracker_connection;

pub mod tracker_host;
