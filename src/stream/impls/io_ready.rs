use std::fs::File;
use std::io::{BufWriter, Cursor, Empty, Sink, Take, Write};
use std::net::TcpStream;
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::net::UnixStream;
use crate::stream::traits::io_ready::IoReady;

impl IoReady for TcpStream {
    fn ready_fd(&self) -> Option<RawFd> {
        Some(self.as_raw_fd())
    }
}

impl IoReady for UnixStream {
    fn ready_fd(&self) -> Option<RawFd> {
        Some(self.as_raw_fd())
    }
}

impl IoReady for File {
    fn ready_fd(&self) -> Option<RawFd> {
        Some(self.as_raw_fd())
    }
}

impl IoReady for Vec<u8> {}

impl IoReady for &[u8] {}

impl<T> IoReady for Cursor<T> {}

impl IoReady for Sink {}

impl IoReady for Empty {}

impl<W: Write + IoReady> IoReady for BufWriter<W> {
    fn ready_fd(&self) -> Option<RawFd> {
        self.get_ref().ready_fd()
    }
}

impl<T: IoReady + ?Sized> IoReady for &mut T {
    fn ready_fd(&self) -> Option<RawFd> {
        (**self).ready_fd()
    }
}

impl<R: IoReady> IoReady for Take<R> {
    fn ready_fd(&self) -> Option<RawFd> {
        self.get_ref().ready_fd()
    }
}

impl<T: IoReady + ?Sized> IoReady for Box<T> {
    fn ready_fd(&self) -> Option<RawFd> {
        (**self).ready_fd()
    }
}
