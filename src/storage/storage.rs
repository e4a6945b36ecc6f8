use once_cell::sync::Lazy;
use regex::Regex;
use regex::bytes::Regex as BytesRegex;
use crate::common::common::find_subsequence;
use crate::common::enums::mogile_error::MogileError;
use crate::storage::enums::http_method::HttpMethod;

/// Bytes peeked when looking for the response head; a node that cannot
/// deliver its head in one segment of this size is treated as broken.
pub const HEAD_PEEK_SIZE: usize = 4096;

static STATUS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^HTTP/\d+\.\d+\s+(\d+)").expect("status line regex"));
static HEAD_OK: Lazy<BytesRegex> = Lazy::new(|| BytesRegex::new(r"\AHTTP/\d+\.\d+\s+200(\s|$)").expect("status regex"));
static CONTENT_LENGTH: Lazy<BytesRegex> = Lazy::new(|| {
    BytesRegex::new(r"(?im)^Content-Length:\s*(\d+)").expect("content length regex")
});

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Put => "PUT",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn request_head(method: HttpMethod, request_uri: &str, content_length: Option<u64>) -> String {
    match content_length {
        Some(length) => format!("{} {} HTTP/1.0\r\nContent-Length: {}\r\n\r\n", method, request_uri, length),
        None => format!("{} {} HTTP/1.0\r\n\r\n", method, request_uri),
    }
}

/// Checks the status line of an upload response, succeeding on any 2xx.
pub fn check_upload_status(url: &str, line: &str) -> Result<u16, MogileError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(MogileError::EmptyResponse(url.to_string()));
    }
    let status = STATUS_LINE
        .captures(line)
        .and_then(|captures| captures[1].parse::<u16>().ok())
        .ok_or_else(|| MogileError::UnparseableResponse {
            url: url.to_string(),
            line: line.to_string(),
        })?;
    if !(200..300).contains(&status) {
        return Err(MogileError::BadResponse {
            url: url.to_string(),
            status,
        });
    }
    Ok(status)
}

/// Splits a peeked response into its head length (terminator excluded) and
/// declared body length. Only `200` responses with a `Content-Length`
/// header are accepted.
pub fn parse_response_head(url: &str, peeked: &[u8]) -> Result<(usize, u64), MogileError> {
    let head_len = find_subsequence(peeked, b"\r\n\r\n").ok_or_else(|| {
        MogileError::InvalidResponse(format!("{}: no complete response head", url))
    })?;
    let head = &peeked[..head_len];
    if !HEAD_OK.is_match(head) {
        return Err(MogileError::InvalidResponse(format!(
            "{}: {:?}",
            url,
            String::from_utf8_lossy(head.split(|byte| *byte == b'\r').next().unwrap_or_default())
        )));
    }
    let length = CONTENT_LENGTH
        .captures(head)
        .and_then(|captures| std::str::from_utf8(&captures[1]).ok()?.parse::<u64>().ok())
        .ok_or_else(|| MogileError::InvalidResponse(format!("{}: missing Content-Length", url)))?;
    Ok((head_len, length))
}
