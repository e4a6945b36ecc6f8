mod common;

use std::time::{Duration, Instant};
use mogilefs_client::network::structs::liveness_prober::LivenessProber;
use mogilefs_client::network::structs::storage_url::StorageUrl;
use crate::common::{closed_port, spawn_silent_listener, spawn_storage};

fn url(raw: &str) -> StorageUrl {
    StorageUrl::parse(raw).expect("valid storage url")
}

#[test]
fn test_verify_keeps_live_node() {
    let storage = spawn_storage(200);
    storage.insert("/dev1/0/000/000/0000000001.fid", b"hello");
    let prober = LivenessProber::new("200", Duration::from_secs(2));

    let good = url(&storage.url("/dev1/0/000/000/0000000001.fid"));
    let refused = url(&format!("http://127.0.0.1:{}/dev2/0/000/000/0000000001.fid", closed_port()));

    let alive = prober.verify(&[refused, good.clone()]);
    assert_eq!(alive, vec![good]);
}

#[test]
fn test_verify_drops_unexpected_status() {
    let storage = spawn_storage(200);
    let prober = LivenessProber::new("200", Duration::from_millis(500));

    let missing = url(&storage.url("/dev1/missing.fid"));
    assert!(prober.verify(&[missing]).is_empty());
}

#[test]
fn test_verify_matches_configured_status() {
    let storage = spawn_storage(200);
    let prober = LivenessProber::new("404", Duration::from_secs(2));

    let missing = url(&storage.url("/dev1/missing.fid"));
    assert_eq!(prober.verify(&[missing.clone()]), vec![missing]);
}

#[test]
fn test_verify_respects_budget() {
    let (_listener, address) = spawn_silent_listener();
    let prober = LivenessProber::new("200", Duration::from_millis(300));

    let started = Instant::now();
    let alive = prober.verify(&[url(&format!("http://{}/dev1/slow.fid", address))]);

    assert!(alive.is_empty());
    assert!(started.elapsed() >= Duration::from_millis(250));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_verify_nothing_reachable() {
    let prober = LivenessProber::default();
    let urls = vec![
        url(&format!("http://127.0.0.1:{}/a", closed_port())),
        url(&format!("http://127.0.0.1:{}/b", closed_port())),
    ];
    assert!(prober.verify(&urls).is_empty());
    assert!(prober.verify(&[]).is_empty());
}

#[test]
fn test_spent_budget_starts_no_probes() {
    let (listener, address) = spawn_silent_listener();
    listener.set_nonblocking(true).expect("nonblocking listener");
    let prober = LivenessProber::new("200", Duration::ZERO);

    let alive = prober.verify(&[url(&format!("http://{}/dev1/a.fid", address))]);

    assert!(alive.is_empty());
    let accepted = listener.accept();
    assert!(
        matches!(&accepted, Err(error) if error.kind() == std::io::ErrorKind::WouldBlock),
        "no connection should have been attempted, got {:?}",
        accepted.map(|(_, peer)| peer)
    );
}
