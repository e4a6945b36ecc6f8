//! High-level file client.
//!
//! [`MogileClient`] ties the pieces together for one domain: metadata
//! lookups through a [`MetadataSource`], reads and size probes against
//! storage nodes, uploads with destination failover, and bigfile
//! reconstruction.
//!
//! # Read-only mode
//!
//! A client built with `readonly = true`, or over an external metadata
//! source, rejects every mutating call with `ReadOnly` before any network
//! traffic happens.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::client::structs::mogile_client::MogileClient;
//! use mogilefs_client::config::structs::configuration::Configuration;
//!
//! let client = MogileClient::new(&Configuration::load_file("mogilefs.toml")?)?;
//! client.store_content("greeting", None, "hello")?;
//! assert_eq!(client.get_file_data("greeting")?, Some(b"hello".to_vec()));
//! ```
//!
//! [`MogileClient`]: crate::client::structs::mogile_client::MogileClient
//! [`MetadataSource`]: crate::client::traits::metadata_source::MetadataSource

/// Implementation blocks for the client and the tracker metadata source.
pub mod impls;

/// Client and metadata source structures.
pub mod structs;

/// The metadata lookup seam.
pub mod traits;
