use crate::common::enums::mogile_error::MogileError;

/// Where a client looks up file locations and key listings.
///
/// The tracker is the usual implementation; a direct database reader can
/// stand in for read-only clients.
#[cfg_attr(test, mockall::automock)]
pub trait MetadataSource: Send + Sync {
    /// Replica URLs of `key`, best first.
    fn get_paths(&self, domain: &str, key: &str, noverify: bool, zone: Option<String>) -> Result<Vec<String>, MogileError>;

    /// Up to `limit` keys starting with `prefix`, following `after`, plus
    /// the cursor for the next page. `None` when nothing matches.
    fn list_keys(
        &self,
        domain: &str,
        prefix: &str,
        after: Option<String>,
        limit: u32,
    ) -> Result<Option<(Vec<String>, Option<String>)>, MogileError>;

    fn size(&self, domain: &str, key: &str) -> Result<Option<u64>, MogileError>;

    fn sleep(&self, seconds: u64) -> Result<(), MogileError>;
}
