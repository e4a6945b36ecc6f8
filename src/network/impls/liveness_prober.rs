use std::io::{ErrorKind, Write};
use std::net::TcpStream;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};
use log::{debug, warn};
use regex::bytes::Regex;
use crate::common::common::remaining_budget;
use crate::config::structs::storage_config::StorageConfig;
use crate::network::enums::interest::Interest;
use crate::network::network::{connect_nonblocking, poll_fds, pollfd, resolve};
use crate::network::structs::liveness_prober::LivenessProber;
use crate::network::structs::probe::Probe;
use crate::network::structs::storage_url::StorageUrl;

const PEEK_SIZE: usize = 128;

impl Default for LivenessProber {
    fn default() -> Self {
        LivenessProber {
            expect: String::from("200"),
            budget: Duration::from_secs(2),
        }
    }
}

impl LivenessProber {
    pub fn new(expect: impl Into<String>, budget: Duration) -> LivenessProber {
        LivenessProber {
            expect: expect.into(),
            budget,
        }
    }

    pub fn from_config(config: &StorageConfig) -> LivenessProber {
        LivenessProber::new(config.liveness_expect.clone(), Duration::from_millis(config.liveness_budget_ms))
    }

    /// Returns the URLs that answered `HEAD` with the expected status within
    /// the budget, in the order they were observed. Usually one, more when
    /// several answer in the same readiness round. The budget starts before
    /// any candidate is resolved, and candidates not yet started when it
    /// runs out are skipped. Every socket opened here is closed before
    /// returning.
    pub fn verify(&self, urls: &[StorageUrl]) -> Vec<StorageUrl> {
        let started = Instant::now();
        let status = match Regex::new(&format!(r"\AHTTP/[\d.]+ {} ", regex::escape(&self.expect))) {
            Ok(status) => status,
            Err(error) => {
                warn!("[Liveness] cannot build status matcher for {:?}: {}", self.expect, error);
                return Vec::new();
            }
        };

        // name resolution blocks, so it is charged to the same budget
        let mut pending: Vec<Probe> = Vec::with_capacity(urls.len());
        for url in urls {
            if remaining_budget(started, self.budget).is_zero() {
                debug!("[Liveness] budget spent before {} could be started", url);
                break;
            }
            if let Some(probe) = Self::start(url) {
                pending.push(probe);
            }
        }
        let written = self.send_requests(pending, started);
        if written.is_empty() {
            debug!("[Liveness] no candidate accepted a request within {:?}", self.budget);
            return Vec::new();
        }
        self.await_status(written, &status, started)
    }

    fn start(url: &StorageUrl) -> Option<Probe> {
        let address = match resolve(url.host(), url.port()) {
            Ok(addresses) => addresses[0],
            Err(error) => {
                debug!("[Liveness] {} does not resolve: {}", url, error);
                return None;
            }
        };
        match connect_nonblocking(address) {
            Ok(socket) => Some(Probe {
                url: url.clone(),
                socket: TcpStream::from(socket),
                request: url.head_request().into_bytes(),
                sent: 0,
            }),
            Err(error) => {
                debug!("[Liveness] connect to {} failed: {}", url, error);
                None
            }
        }
    }

    /// Waits for connects to complete and writes the `HEAD` request to every
    /// writable socket, until at least one request is fully sent or the
    /// budget is gone.
    fn send_requests(&self, mut pending: Vec<Probe>, started: Instant) -> Vec<Probe> {
        let mut written = Vec::new();
        while written.is_empty() && !pending.is_empty() {
            let remaining = remaining_budget(started, self.budget);
            if remaining.is_zero() {
                break;
            }
            let mut fds: Vec<libc::pollfd> = pending
                .iter()
                .map(|probe| pollfd(probe.socket.as_raw_fd(), Interest::Writable))
                .collect();
            match poll_fds(&mut fds, Some(remaining)) {
                Ok(0) => break,
                Ok(_) => {}
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => {
                    warn!("[Liveness] poll failed: {}", error);
                    break;
                }
            }

            let mut waiting = Vec::with_capacity(pending.len());
            for (mut probe, fd) in pending.into_iter().zip(fds) {
                if fd.revents == 0 {
                    waiting.push(probe);
                    continue;
                }
                if fd.revents & (libc::POLLERR | libc::POLLHUP | libc::POLLNVAL) != 0 {
                    debug!("[Liveness] {} failed to connect", probe.url);
                    continue;
                }
                match probe.socket.write(&probe.request[probe.sent..]) {
                    Ok(count) => {
                        probe.sent += count;
                        if probe.sent == probe.request.len() {
                            written.push(probe);
                        } else {
                            waiting.push(probe);
                        }
                    }
                    Err(error) if matches!(error.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                        waiting.push(probe);
                    }
                    Err(error) => debug!("[Liveness] write to {} failed: {}", probe.url, error),
                }
            }
            pending = waiting;
        }
        written
    }

    /// Peeks at the start of each readable response until one carries the
    /// expected status or the budget is gone.
    fn await_status(&self, mut waiting: Vec<Probe>, status: &Regex, started: Instant) -> Vec<StorageUrl> {
        let mut alive = Vec::new();
        let mut buffer = [0u8; PEEK_SIZE];
        while alive.is_empty() && !waiting.is_empty() {
            let remaining = remaining_budget(started, self.budget);
            if remaining.is_zero() {
                break;
            }
            let mut fds: Vec<libc::pollfd> = waiting
                .iter()
                .map(|probe| pollfd(probe.socket.as_raw_fd(), Interest::Readable))
                .collect();
            match poll_fds(&mut fds, Some(remaining)) {
                Ok(0) => break,
                Ok(_) => {}
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => {
                    warn!("[Liveness] poll failed: {}", error);
                    break;
                }
            }

            let mut still_waiting = Vec::with_capacity(waiting.len());
            for (probe, fd) in waiting.into_iter().zip(fds) {
                if fd.revents == 0 {
                    still_waiting.push(probe);
                    continue;
                }
                match probe.socket.peek(&mut buffer) {
                    Ok(0) => debug!("[Liveness] {} closed without answering", probe.url),
                    Ok(count) => {
                        let head = &buffer[..count];
                        if status.is_match(head) {
                            debug!("[Liveness] {} is alive", probe.url);
                            alive.push(probe.url.clone());
                        } else if count == PEEK_SIZE || head.contains(&b'\n') {
                            debug!("[Liveness] {} answered with an unexpected status", probe.url);
                        } else {
                            still_waiting.push(probe);
                        }
                    }
                    Err(error) if matches!(error.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                        still_waiting.push(probe);
                    }
                    Err(error) => debug!("[Liveness] read from {} failed: {}", probe.url, error),
                }
            }
            waiting = still_waiting;
        }
        alive
    }
}
