/// A storage node location as handed out by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageUrl {
    pub(crate) raw: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) request_uri: String,
}
