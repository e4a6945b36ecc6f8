use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub get_file_data_timeout_ms: u64,
    pub liveness_budget_ms: u64,
    pub liveness_expect: String,
    pub upload_timeout_ms: u64,
    pub coalesce_uploads: bool,
}
