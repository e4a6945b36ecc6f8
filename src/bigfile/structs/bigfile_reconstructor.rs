use crate::client::structs::mogile_client::MogileClient;

/// Reads manifests and their parts through a client.
pub struct BigfileReconstructor<'a> {
    pub(crate) client: &'a MogileClient,
}
