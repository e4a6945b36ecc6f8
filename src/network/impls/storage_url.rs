use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::common::enums::mogile_error::MogileError;
use crate::network::structs::storage_url::StorageUrl;

static STORAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^http://([^/:]+)(?::(\d+))?(/.*)?$").expect("storage url regex")
});

impl StorageUrl {
    pub fn parse(raw: &str) -> Result<StorageUrl, MogileError> {
        let captures = STORAGE_URL
            .captures(raw)
            .ok_or_else(|| MogileError::InvalidUrl(raw.to_string()))?;
        let port = match captures.get(2) {
            None => 80,
            Some(port) => port
                .as_str()
                .parse::<u16>()
                .map_err(|_| MogileError::InvalidUrl(raw.to_string()))?,
        };
        Ok(StorageUrl {
            raw: raw.to_string(),
            host: captures[1].to_string(),
            port,
            request_uri: captures.get(3).map_or("/", |uri| uri.as_str()).to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// The `HEAD` request the liveness race sends.
    pub fn head_request(&self) -> String {
        format!("HEAD {} HTTP/1.0\r\n\r\n", self.request_uri)
    }
}

impl FromStr for StorageUrl {
    type Err = MogileError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        StorageUrl::parse(raw)
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
