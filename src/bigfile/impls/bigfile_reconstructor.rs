use std::io::Write;
use log::{debug, warn};
use crate::bigfile::bigfile::{parse_info, part_key};
use crate::bigfile::structs::bigfile_reconstructor::BigfileReconstructor;
use crate::bigfile::structs::manifest::Manifest;
use crate::bigfile::structs::manifest_part::ManifestPart;
use crate::bigfile::structs::part_filter::PartFilter;
use crate::client::structs::mogile_client::MogileClient;
use crate::common::enums::mogile_error::MogileError;
use crate::network::structs::storage_url::StorageUrl;
use crate::stream::enums::timeout_mode::TimeoutMode;
use crate::stream::stream::write_full;
use crate::stream::structs::stream_copier::StreamCopier;
use crate::stream::structs::wait_budget::WaitBudget;
use crate::stream::traits::io_ready::IoReady;

impl<'a> BigfileReconstructor<'a> {
    pub fn new(client: &'a MogileClient) -> BigfileReconstructor<'a> {
        BigfileReconstructor { client }
    }

    /// Fetches and parses the manifest stored under `key`.
    pub fn stat(&self, key: &str) -> Result<Manifest, MogileError> {
        match self.client.get_file_data(key)? {
            Some(data) => Ok(parse_info(&data)),
            None => Err(MogileError::tracker("unknown_key", key)),
        }
    }

    /// Streams every part of `key`'s manifest into `sink`, in part order.
    ///
    /// Returns the bytes written to `sink` (after inflation) and the
    /// manifest. With `verify`, each part's MD5 is checked against the
    /// manifest unless the stream turned out to need inflating.
    pub fn write<W>(&self, key: &str, sink: &mut W, verify: bool) -> Result<(u64, Manifest), MogileError>
    where
        W: Write + IoReady + ?Sized,
    {
        let manifest = self.stat(key)?;
        let mut filter = PartFilter::new(&manifest, verify);
        let timeout = self.client.downloader().timeout;
        let mut copier = StreamCopier::with_timeout(timeout, TimeoutMode::PerWait);
        let mut total = 0u64;

        for (number, part) in manifest.data_parts() {
            let urls = self.reachable(key, number, part)?;
            let mut body = self.client.downloader().get(&urls[0])?;
            filter.begin_part();
            let written = copier.copy_filtered(&mut body, sink, Some(&mut filter))?;
            filter.check_part(&part.md5)?;
            debug!("[Bigfile] {} part {}: {} bytes from {}", key, number, written, urls[0]);
            total += written;
        }

        let tail = filter.finish_stream()?;
        if !tail.is_empty() {
            total += write_full(sink, &tail, &WaitBudget::new(Some(timeout), TimeoutMode::PerWait))?;
        }
        Ok((total, manifest))
    }

    /// Live URLs for one part: the manifest's own paths first, then the
    /// tracker's current paths for the part key.
    fn reachable(&self, key: &str, number: u64, part: &ManifestPart) -> Result<Vec<StorageUrl>, MogileError> {
        let prober = self.client.prober();
        let alive = prober.verify(&parse_urls(&part.paths));
        if !alive.is_empty() {
            return Ok(alive);
        }

        let lookup = part_key(key, number);
        debug!("[Bigfile] manifest paths for part {} unreachable, looking up {}", number, lookup);
        let paths = self.client.get_paths(&lookup)?;
        let alive = prober.verify(&parse_urls(&paths));
        if alive.is_empty() {
            return Err(MogileError::NoDevicesAvailable(lookup));
        }
        Ok(alive)
    }
}

fn parse_urls(paths: &[String]) -> Vec<StorageUrl> {
    paths
        .iter()
        .filter_map(|path| match StorageUrl::parse(path) {
            Ok(url) => Some(url),
            Err(error) => {
                warn!("[Bigfile] skipping path: {}", error);
                None
            }
        })
        .collect()
}
