use std::collections::HashMap;
use std::io::BufReader;
use std::net::TcpStream;
use std::time::Instant;
use crate::tracker::structs::tracker_host::TrackerHost;

#[derive(Debug, Default)]
pub struct ConnectionState {
    pub(crate) socket: Option<BufReader<TcpStream>>,
    pub(crate) bound_host: Option<TrackerHost>,
    pub(crate) last_error: Option<String>,
    pub(crate) last_error_message: Option<String>,
    /// When each host last failed to connect. Entries are only ever
    /// overwritten, never removed.
    pub(crate) dead: HashMap<TrackerHost, Instant>,
}
