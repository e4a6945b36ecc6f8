#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackerHost {
    pub host: String,
    pub port: u16,
}
