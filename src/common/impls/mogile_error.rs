use crate::common::enums::mogile_error::MogileError;
use crate::tracker::structs::error_kind::ErrorKind;

impl MogileError {
    /// Builds a tracker error for `tag`, registering the tag if it is new.
    pub fn tracker(tag: &str, message: impl Into<String>) -> MogileError {
        MogileError::Tracker {
            kind: crate::tracker::tracker::error(tag),
            message: message.into(),
        }
    }

    /// The wire tag of a tracker error, `None` for every other variant.
    pub fn tag(&self) -> Option<&str> {
        match self {
            MogileError::Tracker { kind, .. } => Some(kind.tag()),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&ErrorKind> {
        match self {
            MogileError::Tracker { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn is_tracker_error(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    /// True for failures that mean "try the next candidate" when reading a
    /// file from one of several replica paths.
    pub fn is_retryable_read(&self) -> bool {
        matches!(
            self,
            MogileError::Timeout(_) | MogileError::InvalidResponse(_) | MogileError::Io(_)
        )
    }
}
