//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Storage node transfer settings.
pub mod storage_config;

/// Tracker hosts, domain and connection settings.
pub mod tracker_config;
