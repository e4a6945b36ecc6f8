#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestPart {
    pub bytes: u64,
    /// Lower-case hex.
    pub md5: String,
    pub paths: Vec<String>,
}
