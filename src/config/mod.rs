//! Configuration management module.
//!
//! Loads, saves and validates the client configuration as TOML.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **tracker**: tracker hosts, domain, request/connect timeouts, dead-host
//!   quarantine and the read-only switch
//! - **storage**: download and upload timeouts, liveness race budget and
//!   expected status, upload write coalescing
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("mogilefs.toml", true)?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
