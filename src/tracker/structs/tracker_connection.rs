use std::time::Duration;
use parking_lot::Mutex;
use crate::tracker::structs::connection_state::ConnectionState;
use crate::tracker::structs::tracker_host::TrackerHost;

/// Client for one logical tracker service backed by several hosts.
///
/// Requests are serialized: the state lock is held for the whole
/// write/wait/read cycle, so a connection can be shared between threads
/// (usually behind an `Arc`) without interleaving responses.
#[derive(Debug)]
pub struct TrackerConnection {
    pub(crate) hosts: Vec<TrackerHost>,
    pub(crate) timeout: Duration,
    pub(crate) connect_timeout: Duration,
    pub(crate) dead_host_quarantine: Duration,
    pub(crate) state: Mutex<ConnectionState>,
}
