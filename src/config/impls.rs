/// Defaults, load/save and validation.
pub mod configuration;

pub mod configuration_error;

pub mod storage_config;

pub mod tracker_config;
