use std::collections::BTreeMap;
use crate::bigfile::structs::manifest_part::ManifestPart;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub description: Option<String>,
    pub file_type: Option<String>,
    pub filename: Option<String>,
    pub compressed: bool,
    pub chunks: Option<u64>,
    pub size: Option<u64>,
    /// Keyed by part number; part 0 is never transferred.
    pub parts: BTreeMap<u64, ManifestPart>,
}
