use crate::storage::structs::destination::Destination;

/// A file the tracker has allocated but that holds no data yet. The upload
/// tries `destinations` in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub fid: String,
    pub key: String,
    pub domain: String,
    pub class: Option<String>,
    pub destinations: Vec<Destination>,
}
