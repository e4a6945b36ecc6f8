use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};
use log::{debug, warn};
use parking_lot::Mutex;
use rand::RngExt;
use crate::common::enums::mogile_error::MogileError;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::network::enums::interest::Interest;
use crate::network::network::{connect_timeout, peer_name, wait_for};
use crate::tracker::structs::connection_state::ConnectionState;
use crate::tracker::structs::param_map::ParamMap;
use crate::tracker::structs::tracker_connection::TrackerConnection;
use crate::tracker::structs::tracker_host::TrackerHost;
use crate::tracker::tracker::{make_request, parse_response};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_DEAD_HOST_QUARANTINE: Duration = Duration::from_secs(5);

/// One method per tracker command, each a plain [`TrackerConnection::send`].
macro_rules! tracker_commands {
    ($($name:ident),* $(,)?) => {
        impl TrackerConnection {
            $(
                pub fn $name(&self, params: &ParamMap) -> Result<ParamMap, MogileError> {
                    self.send(stringify!($name), params)
                }
            )*
        }
    };
}

tracker_commands!(
    create_open,
    create_close,
    get_paths,
    delete,
    sleep,
    rename,
    list_keys,
    get_hosts,
    get_devices,
    list_fids,
    stats,
    get_domains,
    create_domain,
    delete_domain,
    create_class,
    update_class,
    delete_class,
    create_host,
    update_host,
    delete_host,
    set_state,
);

impl TrackerConnection {
    /// Builds a connection over `hosts` (`host:port` strings). Nothing is
    /// connected until the first request.
    pub fn new<S: AsRef<str>>(hosts: &[S], timeout: Duration) -> Result<TrackerConnection, MogileError> {
        if hosts.is_empty() {
            return Err(MogileError::NoHosts);
        }
        let hosts = hosts
            .iter()
            .map(|host| host.as_ref().parse::<TrackerHost>())
            .collect::<Result<Vec<TrackerHost>, MogileError>>()?;
        Ok(TrackerConnection {
            hosts,
            timeout,
            connect_timeout: timeout,
            dead_host_quarantine: DEFAULT_DEAD_HOST_QUARANTINE,
            state: Mutex::new(ConnectionState::default()),
        })
    }

    pub fn from_config(config: &TrackerConfig) -> Result<TrackerConnection, MogileError> {
        Ok(TrackerConnection::new(&config.hosts, Duration::from_millis(config.timeout_ms))?
            .with_connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .with_dead_host_quarantine(Duration::from_millis(config.dead_host_quarantine_ms)))
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> TrackerConnection {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_dead_host_quarantine(mut self, quarantine: Duration) -> TrackerConnection {
        self.dead_host_quarantine = quarantine;
        self
    }

    pub fn hosts(&self) -> &[TrackerHost] {
        &self.hosts
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_connected(&self) -> bool {
        self.state.lock().socket.is_some()
    }

    /// The host the current socket is connected to.
    pub fn bound_host(&self) -> Option<TrackerHost> {
        self.state.lock().bound_host.clone()
    }

    /// Tag of the last `ERR` response seen on this connection.
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    pub fn last_error_message(&self) -> Option<String> {
        self.state.lock().last_error_message.clone()
    }

    /// When `host` was last marked dead, if ever.
    pub fn dead_since(&self, host: &TrackerHost) -> Option<Instant> {
        self.state.lock().dead.get(host).copied()
    }

    /// Closes the socket. The next request reconnects.
    pub fn close(&self) {
        self.state.lock().shutdown();
    }

    /// Sends `command` with `params` and waits for the response line.
    ///
    /// Any command name is accepted; the generated methods are thin
    /// wrappers around this. Socket-level failures close the connection
    /// before the error is returned, so a late response can never be read
    /// as the answer to a later request.
    #[tracing::instrument(level = "debug", skip(self, params))]
    pub fn send(&self, command: &str, params: &ParamMap) -> Result<ParamMap, MogileError> {
        let mut state = self.state.lock();
        let request = make_request(command, params);

        let sent = {
            let socket = self.socket(&mut state)?;
            socket.get_mut().write(request.as_bytes())
        };
        let sent = match sent {
            Ok(sent) => sent,
            Err(error) => {
                warn!("[Tracker] sending {} failed: {}", command, error);
                state.shutdown();
                return Err(MogileError::UnreachableBackend);
            }
        };
        if sent != request.len() {
            state.shutdown();
            return Err(MogileError::RequestTruncated { sent, expected: request.len() });
        }

        self.readable(&mut state)?;
        let line = self.read_line(&mut state)?;
        match parse_response(&line) {
            Err(MogileError::Tracker { kind, message }) => {
                state.record_error(kind.tag(), &message);
                Err(MogileError::Tracker { kind, message })
            }
            response => response,
        }
    }

    /// Returns the live socket, connecting first when there is none.
    fn socket<'a>(&self, state: &'a mut ConnectionState) -> Result<&'a mut BufReader<TcpStream>, MogileError> {
        if state.socket.is_none() {
            self.connect(state)?;
        }
        state.socket.as_mut().ok_or(MogileError::UnreachableBackend)
    }

    /// Tries every host not in quarantine, in random order, until one
    /// accepts a connection. Failed hosts are stamped dead.
    fn connect(&self, state: &mut ConnectionState) -> Result<(), MogileError> {
        let now = Instant::now();
        let mut rng = rand::rng();
        let mut hosts = self.hosts.clone();
        hosts.sort_by_cached_key(|_| rng.random::<u64>());

        for host in hosts {
            if let Some(since) = state.dead.get(&host) {
                if now.duration_since(*since) < self.dead_host_quarantine {
                    debug!("[Tracker] skipping {} (dead since {:?} ago)", host, since.elapsed());
                    continue;
                }
            }
            match self.open(&host) {
                Ok(stream) => {
                    debug!("[Tracker] connected to {}", host);
                    state.socket = Some(BufReader::new(stream));
                    state.bound_host = Some(host);
                    return Ok(());
                }
                Err(error) => {
                    warn!("[Tracker] connect to {} failed: {}", host, error);
                    state.dead.insert(host, now);
                }
            }
        }
        Err(MogileError::UnreachableBackend)
    }

    fn open(&self, host: &TrackerHost) -> std::io::Result<TcpStream> {
        let stream = connect_timeout(&host.host, host.port, self.connect_timeout)?;
        stream.set_nodelay(true)?;
        if !self.timeout.is_zero() {
            stream.set_read_timeout(Some(self.timeout))?;
        }
        Ok(stream)
    }

    /// Waits up to the request timeout for the response to start arriving.
    fn readable(&self, state: &mut ConnectionState) -> Result<(), MogileError> {
        let Some(socket) = state.socket.as_ref() else {
            return Err(MogileError::UnreachableBackend);
        };
        if !socket.buffer().is_empty() {
            return Ok(());
        }
        let fd = socket.get_ref().as_raw_fd();
        let peer = peer_name(socket.get_ref());
        match wait_for(fd, Interest::Readable, self.timeout) {
            Ok(true) => Ok(()),
            Ok(false) => {
                state.shutdown();
                Err(MogileError::UnreadableSocket(peer))
            }
            Err(error) => {
                state.shutdown();
                Err(error.into())
            }
        }
    }

    fn read_line(&self, state: &mut ConnectionState) -> Result<String, MogileError> {
        let mut line = Vec::new();
        let read = match state.socket.as_mut() {
            Some(socket) => socket.read_until(b'\n', &mut line),
            None => return Err(MogileError::UnreachableBackend),
        };
        match read {
            Ok(0) => {
                state.shutdown();
                Err(MogileError::InvalidResponse(String::from("tracker closed the connection")))
            }
            Ok(_) => Ok(String::from_utf8_lossy(&line).into_owned()),
            Err(error) => {
                state.shutdown();
                Err(error.into())
            }
        }
    }
}
