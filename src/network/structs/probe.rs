use std::net::TcpStream;
use crate::network::structs::storage_url::StorageUrl;

/// One in-flight liveness check. Dropping it closes the socket.
#[derive(Debug)]
pub(crate) struct Probe {
    pub(crate) url: StorageUrl,
    pub(crate) socket: TcpStream,
    pub(crate) request: Vec<u8>,
    pub(crate) sent: usize,
}
