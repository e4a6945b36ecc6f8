use once_cell::sync::Lazy;
use regex::Regex;
use crate::bigfile::structs::manifest::Manifest;
use crate::bigfile::structs::manifest_part::ManifestPart;

/// Parts starting with these bytes are gzip files and are never inflated.
pub const GZIP_HEADER: [u8; 2] = [0x1f, 0x8b];

pub const MANIFEST_PREFIX: &str = "big_info:";

static TEXT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(des|type|filename)\s+(.+)$").expect("text directive regex"));
static COMPRESSED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^compressed\s+([01])$").expect("compressed directive regex"));
static NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(chunks|size)\s+(\d+)$").expect("numeric directive regex"));
static PART_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^part\s+(\d+)\s+bytes=(\d+)\s+md5=(.+)\s+paths:\s+(.+)$").expect("part directive regex")
});
static PATH_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").expect("path separator regex"));

/// Parses a manifest. Unknown lines are ignored, so any input yields a
/// manifest, possibly an empty one.
pub fn parse_info(data: &[u8]) -> Manifest {
    let text = String::from_utf8_lossy(data);
    let mut manifest = Manifest::default();
    for line in text.lines() {
        if let Some(captures) = TEXT_LINE.captures(line) {
            let value = Some(captures[2].to_string());
            match &captures[1] {
                "des" => manifest.description = value,
                "type" => manifest.file_type = value,
                _ => manifest.filename = value,
            }
        } else if let Some(captures) = COMPRESSED_LINE.captures(line) {
            manifest.compressed = &captures[1] == "1";
        } else if let Some(captures) = NUMBER_LINE.captures(line) {
            let value = captures[2].parse::<u64>().ok();
            match &captures[1] {
                "chunks" => manifest.chunks = value,
                _ => manifest.size = value,
            }
        } else if let Some(captures) = PART_LINE.captures(line) {
            let (Ok(number), Ok(bytes)) = (captures[1].parse::<u64>(), captures[2].parse::<u64>()) else {
                continue;
            };
            manifest.parts.insert(number, ManifestPart {
                bytes,
                md5: captures[3].to_lowercase(),
                paths: PATH_SEPARATOR.split(&captures[4]).map(str::to_string).collect(),
            });
        }
    }
    manifest
}

/// Key under which the paths of part `number` can be looked up again.
pub fn part_key(manifest_key: &str, number: u64) -> String {
    format!("{},{}", manifest_key.strip_prefix(MANIFEST_PREFIX).unwrap_or(manifest_key), number)
}
