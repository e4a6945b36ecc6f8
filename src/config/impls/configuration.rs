use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::storage_config::StorageConfig;
use crate::config::structs::tracker_config::TrackerConfig;

pub const LOG_LEVELS: &[&str] = &["off", "trace", "debug", "info", "warn", "error"];

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker: TrackerConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`. When the file is missing or corrupt and
    /// `create` is set, a default configuration is written there first and
    /// returned.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("[CONFIG] No config file found or corrupt at {}: {}", path, error);
                if !create {
                    return Err(error);
                }
                log::info!("[CONFIG] Creating config file {}", path);
                let config = Configuration::init();
                let config_toml = toml::to_string(&config).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                config
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.tracker.hosts.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[tracker] hosts must not be empty")));
        }

        let check_map = self.tracker.hosts.iter()
            .map(|host| ("[tracker] hosts", host.as_str(), r"^[^:\s]+:\d{1,5}$"))
            .chain([
                ("[tracker] domain", self.tracker.domain.as_str(), r"^\S+$"),
                ("[storage] liveness_expect", self.storage.liveness_expect.as_str(), r"^\d{1,3}$"),
            ]);
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("bad pattern for {}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
