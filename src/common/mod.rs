//! Common error type and shared helpers.
//!
//! Every fallible operation in the crate returns [`MogileError`], a single
//! `thiserror` enum whose tracker variant carries a runtime-registered
//! [`ErrorKind`](crate::tracker::structs::error_kind::ErrorKind) instead of a
//! closed list of server error codes.
//!
//! # Example
//!
//! ```rust,ignore
//! use mogilefs_client::common::enums::mogile_error::MogileError;
//!
//! match client.delete("some/key") {
//!     Err(error) if error.tag() == Some("unknown_key") => {}
//!     Err(error) => return Err(error),
//!     Ok(()) => {}
//! }
//! ```
//!
//! [`MogileError`]: crate::common::enums::mogile_error::MogileError

/// Error enumerations.
pub mod enums;

/// Budget and timing helpers.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common helpers.
pub mod tests;
