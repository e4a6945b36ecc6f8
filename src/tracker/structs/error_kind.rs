use std::sync::Arc;

/// A tracker error tag with a registry-assigned id.
///
/// Two kinds are equal when their ids are; a registry hands out exactly
/// one id per tag, so kinds from the same registry compare like their tags.
#[derive(Debug, Clone)]
pub struct ErrorKind {
    pub(crate) id: u32,
    pub(crate) tag: Arc<str>,
}
