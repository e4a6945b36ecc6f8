use std::io::{self, ErrorKind};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::os::fd::RawFd;
use std::time::{Duration, Instant};
use socket2::{Domain, Protocol, Socket, Type};
use crate::common::common::remaining_budget;
use crate::network::enums::interest::Interest;

impl Interest {
    pub(crate) fn poll_events(self) -> libc::c_short {
        match self {
            Interest::Readable => libc::POLLIN,
            Interest::Writable => libc::POLLOUT,
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interest::Readable => f.write_str("readable"),
            Interest::Writable => f.write_str("writable"),
        }
    }
}

/// Milliseconds for `poll(2)`, rounded up so a sub-millisecond remainder
/// does not turn into a zero timeout. `None` waits forever.
pub fn poll_timeout_ms(timeout: Option<Duration>) -> libc::c_int {
    match timeout {
        None => -1,
        Some(timeout) => {
            let millis = timeout.as_nanos().div_ceil(1_000_000);
            millis.min(libc::c_int::MAX as u128) as libc::c_int
        }
    }
}

/// Thin wrapper over `poll(2)`, returning the number of ready descriptors.
pub fn poll_fds(fds: &mut [libc::pollfd], timeout: Option<Duration>) -> io::Result<usize> {
    let ready = unsafe {
        libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, poll_timeout_ms(timeout))
    };
    if ready < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(ready as usize)
}

pub fn pollfd(fd: RawFd, interest: Interest) -> libc::pollfd {
    libc::pollfd {
        fd,
        events: interest.poll_events(),
        revents: 0,
    }
}

/// Waits up to `timeout` for `fd` to become ready.
///
/// Returns `Ok(false)` once the budget is spent; a zero budget returns
/// immediately without polling. Error and hang-up conditions count as
/// ready, the following read or write reports them.
pub fn wait_for(fd: RawFd, interest: Interest, timeout: Duration) -> io::Result<bool> {
    let started = Instant::now();
    loop {
        let remaining = remaining_budget(started, timeout);
        if remaining.is_zero() {
            return Ok(false);
        }
        let mut fds = [pollfd(fd, interest)];
        match poll_fds(&mut fds, Some(remaining)) {
            Ok(0) => continue,
            Ok(_) => return Ok(true),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Waits without a deadline for `fd` to become ready.
pub fn wait_until_ready(fd: RawFd, interest: Interest) -> io::Result<()> {
    loop {
        let mut fds = [pollfd(fd, interest)];
        match poll_fds(&mut fds, None) {
            Ok(0) => continue,
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

pub fn resolve(host: &str, port: u16) -> io::Result<Vec<SocketAddr>> {
    let addresses: Vec<SocketAddr> = (host, port).to_socket_addrs()?.collect();
    if addresses.is_empty() {
        return Err(io::Error::new(ErrorKind::NotFound, format!("{}:{} did not resolve", host, port)));
    }
    Ok(addresses)
}

/// Blocking connect bounded by `timeout`, trying every resolved address.
pub fn connect_timeout(host: &str, port: u16, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_error = None;
    for address in resolve(host, port)? {
        let socket = Socket::new(Domain::for_address(address), Type::STREAM, Some(Protocol::TCP))?;
        match socket.connect_timeout(&address.into(), timeout) {
            Ok(()) => return Ok(socket.into()),
            Err(e) => last_error = Some(e),
        }
    }
    Err(last_error.unwrap_or_else(|| io::Error::new(ErrorKind::NotFound, "no address to connect to")))
}

/// Starts a non-blocking connect; completion is observed as writability.
pub fn connect_nonblocking(address: SocketAddr) -> io::Result<Socket> {
    let socket = Socket::new(Domain::for_address(address), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_nonblocking(true)?;
    match socket.connect(&address.into()) {
        Ok(()) => Ok(socket),
        Err(e) if e.raw_os_error() == Some(libc::EINPROGRESS) || e.kind() == ErrorKind::WouldBlock => Ok(socket),
        Err(e) => Err(e),
    }
}

/// `host:port` of the peer, for error messages.
pub fn peer_name(stream: &TcpStream) -> String {
    match stream.peer_addr() {
        Ok(address) => address.to_string(),
        Err(_) => String::from("unknown peer"),
    }
}
