//! # mogilefs-client
//!
//! A synchronous client for MogileFS clusters: the tracker line protocol,
//! storage node transfers over HTTP/1.0, and bigfile reconstruction.
//!
//! ## Overview
//!
//! A MogileFS tracker knows where every file lives; storage nodes hold the
//! bytes. This crate talks to both. It keeps at most one tracker socket per
//! connection, fails over between tracker hosts with a short quarantine for
//! dead ones, races liveness checks against replica URLs, and streams file
//! bodies through one reusable buffer.
//!
//! ## Features
//!
//! - **Tracker Protocol**: request encoding, response parsing and a runtime
//!   registry of tracker error tags
//! - **Host Failover**: shuffled host order, dead-host quarantine,
//!   timeout-bounded reads that close the socket on expiry
//! - **Liveness Race**: non-blocking `HEAD` checks against many storage URLs
//!   in a single `poll(2)` loop
//! - **Transfers**: `PUT` uploads with ordered destination failover,
//!   `GET`/`HEAD` downloads, chunked copying with optional inline transforms
//! - **Bigfiles**: manifest parsing, MD5 verification, zlib inflation
//! - **Read-only Clients**: mutations refused before any network traffic
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mogilefs_client::client::structs::mogile_client::MogileClient;
//! use mogilefs_client::config::structs::configuration::Configuration;
//! use mogilefs_client::logging::setup_logging;
//!
//! let config = Configuration::load_from_file("mogilefs.toml", true)?;
//! setup_logging(&config)?;
//!
//! let client = MogileClient::new(&config)?;
//! client.store_content("hello", None, "world")?;
//! ```
//!
//! ## Modules
//!
//! - [`bigfile`] - Multi-part file manifests and reconstruction
//! - [`client`] - High-level file client over a metadata source
//! - [`common`] - Crate-wide error type and timing helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`logging`] - `fern` logger setup
//! - [`network`] - Readiness helpers and the storage liveness race
//! - [`storage`] - Storage node uploads and downloads
//! - [`stream`] - Chunked stream copying
//! - [`tracker`] - Tracker protocol client

/// Bigfile manifest parsing and part reconstruction.
///
/// Fetches a `big_info` manifest, locates a live replica of each part and
/// streams the parts back in order, verifying or inflating on the way.
pub mod bigfile;

/// High-level file client.
///
/// `MogileClient` and the `MetadataSource` trait it reads metadata through.
pub mod client;

/// Common error type and shared helpers.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating the TOML configuration.
pub mod config;

/// Logging setup on top of `fern`.
pub mod logging;

/// Socket readiness helpers and the storage liveness race.
pub mod network;

/// Storage node transfers.
///
/// `PUT` uploads with destination failover and `GET`/`HEAD` downloads.
pub mod storage;

/// Chunked stream copying with optional transforms and timeouts.
pub mod stream;

/// Tracker protocol client.
///
/// Line codec, error registry and the failover-aware tracker connection.
pub mod tracker;
