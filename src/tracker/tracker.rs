use std::borrow::Cow;
use once_cell::sync::Lazy;
use percent_encoding::percent_decode;
use regex::Regex;
use crate::common::enums::mogile_error::MogileError;
use crate::tracker::structs::error_kind::ErrorKind;
use crate::tracker::structs::error_registry::ErrorRegistry;
use crate::tracker::structs::param_map::ParamMap;

/// Error tags the tracker is known to send, registered up front.
pub const KNOWN_ERRORS: &[&str] = &[
    "dup",
    "after_mismatch",
    "bad_params",
    "class_exists",
    "class_has_files",
    "class_not_found",
    "db",
    "domain_has_files",
    "domain_exists",
    "domain_not_empty",
    "domain_not_found",
    "failure",
    "host_exists",
    "host_mismatch",
    "host_not_empty",
    "host_not_found",
    "invalid_chars",
    "invalid_checker_level",
    "invalid_mindevcount",
    "key_exists",
    "no_class",
    "no_devices",
    "no_domain",
    "no_host",
    "no_ip",
    "no_key",
    "no_port",
    "none_match",
    "plugin_aborted",
    "state_too_high",
    "unknown_command",
    "unknown_host",
    "unknown_key",
    "unknown_state",
    "unreg_domain",
];

pub static ERROR_REGISTRY: Lazy<ErrorRegistry> = Lazy::new(ErrorRegistry::with_known_errors);

static ERR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ERR\s+(\w+)\s*(.*)").expect("ERR line regex"));
static OK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^OK\s+\d*\s*(\S*)").expect("OK line regex"));

/// The process-wide kind for `tag`, registering it on first sight.
pub fn error(tag: &str) -> ErrorKind {
    ERROR_REGISTRY.error(tag)
}

fn is_literal(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b',' | b'-' | b'.' | b'/' | b'\\' | b':' | b' ')
}

/// Escapes one key or value: bytes outside `[A-Za-z0-9_,-./\: ]` become
/// `%xx`, then spaces become `+`.
pub fn url_escape(input: &[u8]) -> String {
    let mut escaped = String::with_capacity(input.len());
    for &byte in input {
        if byte == b' ' {
            escaped.push('+');
        } else if is_literal(byte) {
            escaped.push(byte as char);
        } else {
            escaped.push('%');
            escaped.push_str(&hex::encode([byte]));
        }
    }
    escaped
}

/// Reverses [`url_escape`]. `+` is mapped to space before `%xx` sequences
/// are decoded, so an escaped `+` comes back as `+`. Malformed `%`
/// sequences pass through untouched.
pub fn url_unescape(input: &str) -> Vec<u8> {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };
    percent_decode(spaced.as_bytes()).collect()
}

pub fn url_encode(params: &ParamMap) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", url_escape(key), url_escape(value)))
        .collect::<Vec<String>>()
        .join("&")
}

/// Parses `k=v&k2=v2`. Empty segments are skipped and a segment without
/// `=` yields an empty value.
pub fn url_decode(input: &str) -> ParamMap {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (url_unescape(key), url_unescape(value)),
            None => (url_unescape(pair), Vec::new()),
        })
        .collect()
}

pub fn make_request(command: &str, params: &ParamMap) -> String {
    format!("{} {}\r\n", command, url_encode(params))
}

/// Interprets one response line, with or without its line terminator.
pub fn parse_response(line: &str) -> Result<ParamMap, MogileError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(captures) = ERR_LINE.captures(line) {
        let message = url_unescape(captures.get(2).map_or("", |message| message.as_str()));
        return Err(MogileError::tracker(&captures[1], String::from_utf8_lossy(&message)));
    }
    if let Some(captures) = OK_LINE.captures(line) {
        return Ok(url_decode(&captures[1]));
    }
    Err(MogileError::InvalidResponse(format!("{:?}", line)))
}
