use crate::config::structs::tracker_config::TrackerConfig;

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            hosts: vec![String::from("127.0.0.1:7001")],
            domain: String::from("default"),
            timeout_ms: 3000,
            connect_timeout_ms: 3000,
            dead_host_quarantine_ms: 5000,
            readonly: false,
        }
    }
}
