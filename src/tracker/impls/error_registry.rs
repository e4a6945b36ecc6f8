use std::collections::HashMap;
use log::debug;
use parking_lot::RwLock;
use crate::tracker::structs::error_kind::ErrorKind;
use crate::tracker::structs::error_registry::ErrorRegistry;
use crate::tracker::tracker::KNOWN_ERRORS;

impl ErrorRegistry {
    pub fn new() -> ErrorRegistry {
        ErrorRegistry {
            kinds: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_known_errors() -> ErrorRegistry {
        let registry = ErrorRegistry::new();
        for tag in KNOWN_ERRORS {
            registry.error(tag);
        }
        registry
    }

    /// Returns the kind for `tag`, registering it when unseen. Concurrent
    /// first registrations of the same tag all get the same kind.
    pub fn error(&self, tag: &str) -> ErrorKind {
        if let Some(kind) = self.kinds.read().get(tag) {
            return kind.clone();
        }
        let mut kinds = self.kinds.write();
        if let Some(kind) = kinds.get(tag) {
            return kind.clone();
        }
        let kind = ErrorKind::new(kinds.len() as u32, tag);
        debug!("[Tracker] registered error kind {} as {}", tag, kind.display_name());
        kinds.insert(tag.to_string(), kind.clone());
        kind
    }

    pub fn lookup(&self, tag: &str) -> Option<ErrorKind> {
        self.kinds.read().get(tag).cloned()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.kinds.read().contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.kinds.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.read().is_empty()
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> Vec<String> {
        let kinds = self.kinds.read();
        let mut registered: Vec<&ErrorKind> = kinds.values().collect();
        registered.sort_by_key(|kind| kind.id);
        registered.iter().map(|kind| kind.tag().to_string()).collect()
    }
}
