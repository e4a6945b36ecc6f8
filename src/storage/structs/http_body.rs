use std::net::TcpStream;
use crate::network::structs::storage_url::StorageUrl;

#[derive(Debug)]
pub struct HttpBody {
    pub(crate) stream: TcpStream,
    pub(crate) url: StorageUrl,
    pub(crate) content_length: u64,
    pub(crate) remaining: u64,
}
