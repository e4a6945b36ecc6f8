use std::collections::BTreeMap;

/// Request or response parameters. Keys and values are raw bytes since the
/// wire encoding can carry any byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap(pub BTreeMap<Vec<u8>, Vec<u8>>);
