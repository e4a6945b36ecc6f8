//! Socket readiness helpers and the storage liveness race.
//!
//! Everything here works on plain blocking or non-blocking `std`/`socket2`
//! sockets and `poll(2)`; nothing spawns threads.
//!
//! # Features
//!
//! - Timeout-bounded connects through `socket2`
//! - Single-descriptor readiness waits with `EINTR` budget recomputation
//! - [`LivenessProber`]: non-blocking connects to many storage URLs and a
//!   single-threaded race for the first ones answering `HEAD` with the
//!   expected status
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::network::structs::liveness_prober::LivenessProber;
//!
//! let alive = LivenessProber::default().verify(&candidates);
//! ```
//!
//! [`LivenessProber`]: crate::network::structs::liveness_prober::LivenessProber

/// Readiness interest enumeration.
pub mod enums;

/// Implementation blocks for the prober and storage URLs.
pub mod impls;

/// Prober and storage URL structures.
pub mod structs;

/// Connect, poll and readiness helpers.
#[allow(clippy::module_inception)]
pub mod network;
