use crate::config::structs::storage_config::StorageConfig;

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            get_file_data_timeout_ms: 5000,
            liveness_budget_ms: 2000,
            liveness_expect: String::from("200"),
            upload_timeout_ms: 5000,
            coalesce_uploads: true,
        }
    }
}
