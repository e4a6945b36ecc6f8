use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub hosts: Vec<String>,
    pub domain: String,
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub dead_host_quarantine_ms: u64,
    pub readonly: bool,
}
