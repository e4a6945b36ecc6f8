use std::os::fd::RawFd;

/// A stream that may expose a descriptor to wait on after `EAGAIN`.
///
/// Sockets and files return their descriptor; in-memory streams return
/// `None` and are simply retried.
pub trait IoReady {
    fn ready_fd(&self) -> Option<RawFd> {
        None
    }
}
