use crate::network::structs::storage_url::StorageUrl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub device_id: String,
    pub url: StorageUrl,
}
