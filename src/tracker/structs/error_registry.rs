use std::collections::HashMap;
use parking_lot::RwLock;
use crate::tracker::structs::error_kind::ErrorKind;

#[derive(Debug, Default)]
pub struct ErrorRegistry {
    pub(crate) kinds: RwLock<HashMap<String, ErrorKind>>,
}
