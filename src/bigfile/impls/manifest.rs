use crate::bigfile::structs::manifest::Manifest;
use crate::bigfile::structs::manifest_part::ManifestPart;

impl Manifest {
    /// Whether parts may hold a raw zlib stream to inflate.
    pub fn inflates(&self) -> bool {
        self.compressed && self.file_type.as_deref() == Some("file")
    }

    /// Parts that are actually transferred, in order.
    pub fn data_parts(&self) -> impl Iterator<Item = (u64, &ManifestPart)> {
        self.parts.iter().filter(|(number, _)| **number != 0).map(|(number, part)| (*number, part))
    }
}
