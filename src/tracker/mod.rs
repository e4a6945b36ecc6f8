//! Tracker protocol client.
//!
//! Talks the MogileFS tracker line protocol: one `command urlencoded-params`
//! line per request, one `OK ...` or `ERR tag message` line per response.
//!
//! # Main Components
//!
//! - `TrackerConnection` - at most one live socket to one of several
//!   tracker hosts, with shuffled host selection and dead-host quarantine
//! - `ParamMap` - byte-string request and response parameters
//! - `ErrorRegistry` / `ErrorKind` - runtime registry of tracker error tags
//! - Codec functions in [`tracker`](crate::tracker::tracker)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use mogilefs_client::tracker::structs::param_map::ParamMap;
//! use mogilefs_client::tracker::structs::tracker_connection::TrackerConnection;
//!
//! let tracker = TrackerConnection::new(&["10.0.0.1:7001", "10.0.0.2:7001"], Duration::from_secs(3))?;
//! let paths = tracker.get_paths(&ParamMap::new().with("domain", "photos").with("key", "cat.jpg"))?;
//! ```

/// Implementation blocks for tracker structs.
pub mod impls;

/// Connection, host, parameter and error-kind structures.
pub mod structs;

/// Line codec, known error tags and the process-wide registry.
#[allow(clippy::module_inception)]
pub mod tracker;
