use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use crate::tracker::structs::error_kind::ErrorKind;

impl ErrorKind {
    pub(crate) fn new(id: u32, tag: &str) -> ErrorKind {
        ErrorKind {
            id,
            tag: Arc::from(tag),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// `unknown_key` becomes `UnknownKeyError`.
    pub fn display_name(&self) -> String {
        let mut name = String::with_capacity(self.tag.len() + 5);
        for word in self.tag.split('_').filter(|word| !word.is_empty()) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
        name.push_str("Error");
        name
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl Hash for ErrorKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
