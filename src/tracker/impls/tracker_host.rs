use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::common::enums::mogile_error::MogileError;
use crate::tracker::structs::tracker_host::TrackerHost;

static HOST_PORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+):(\d+)$").expect("host:port regex"));

impl FromStr for TrackerHost {
    type Err = MogileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = HOST_PORT
            .captures(value)
            .ok_or_else(|| MogileError::InvalidHost(value.to_string()))?;
        let port = captures[2]
            .parse::<u16>()
            .map_err(|_| MogileError::InvalidHost(value.to_string()))?;
        Ok(TrackerHost {
            host: captures[1].to_string(),
            port,
        })
    }
}

impl fmt::Display for TrackerHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
