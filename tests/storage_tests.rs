mod common;

use std::io::{Cursor, Read};
use std::time::Duration;
use mogilefs_client::common::enums::mogile_error::MogileError;
use mogilefs_client::network::structs::storage_url::StorageUrl;
use mogilefs_client::storage::enums::upload_source::UploadSource;
use mogilefs_client::storage::structs::destination::Destination;
use mogilefs_client::storage::structs::pending_file::PendingFile;
use mogilefs_client::storage::structs::storage_downloader::StorageDownloader;
use mogilefs_client::storage::structs::storage_uploader::StorageUploader;
use mogilefs_client::tracker::structs::tracker_connection::TrackerConnection;
use crate::common::{closed_port, ok, spawn_storage, spawn_tracker};

fn destination(device_id: &str, raw: &str) -> Destination {
    Destination {
        device_id: device_id.to_string(),
        url: StorageUrl::parse(raw).expect("valid storage url"),
    }
}

fn pending(destinations: Vec<Destination>) -> PendingFile {
    PendingFile {
        fid: String::from("42"),
        key: String::from("test_key"),
        domain: String::from("testdomain"),
        class: None,
        destinations,
    }
}

#[test]
fn test_store_skips_failing_destination() {
    let tracker = spawn_tracker(|_| ok(""));
    let connection = TrackerConnection::new(&[tracker.host()], Duration::from_secs(2)).expect("valid hosts");
    let bad = spawn_storage(500);
    let good = spawn_storage(200);
    let file = pending(vec![
        destination("1", &bad.url("/dev1/0/000/000/0000000042.fid")),
        destination("2", &good.url("/dev2/0/000/000/0000000042.fid")),
    ]);

    let size = StorageUploader::new(Duration::from_secs(2))
        .store(&connection, &file, &mut UploadSource::from_bytes("data"))
        .expect("second destination accepts the upload");

    assert_eq!(size, 4);
    assert_eq!(bad.uploads().len(), 1);
    assert_eq!(good.file("/dev2/0/000/000/0000000042.fid"), Some(b"data".to_vec()));

    let closes = tracker.requests_for("create_close");
    assert_eq!(closes.len(), 1);
    assert!(closes[0].contains("devid=2"), "got {}", closes[0]);
    assert!(closes[0].contains("fid=42"), "got {}", closes[0]);
    assert!(closes[0].contains("size=4"), "got {}", closes[0]);
}

#[test]
fn test_store_reports_last_error() {
    let tracker = spawn_tracker(|_| ok(""));
    let connection = TrackerConnection::new(&[tracker.host()], Duration::from_secs(2)).expect("valid hosts");
    let bad = spawn_storage(507);
    let file = pending(vec![destination("1", &bad.url("/dev1/x.fid"))]);

    let result = StorageUploader::new(Duration::from_secs(2)).store(&connection, &file, &mut UploadSource::from_bytes("data"));

    match result {
        Err(MogileError::BadResponse { status, .. }) => assert_eq!(status, 507),
        other => panic!("expected BadResponse, got {:?}", other),
    }
    assert!(tracker.requests_for("create_close").is_empty());
}

#[test]
fn test_store_without_reachable_nodes() {
    let tracker = spawn_tracker(|_| ok(""));
    let connection = TrackerConnection::new(&[tracker.host()], Duration::from_secs(2)).expect("valid hosts");
    let file = pending(vec![
        destination("1", &format!("http://127.0.0.1:{}/dev1/x.fid", closed_port())),
        destination("2", &format!("http://127.0.0.1:{}/dev2/x.fid", closed_port())),
    ]);

    let result = StorageUploader::new(Duration::from_secs(1)).store(&connection, &file, &mut UploadSource::from_bytes("data"));
    assert!(matches!(result, Err(MogileError::NoStorageNodes)), "got {:?}", result);
}

#[test]
fn test_put_from_reader_and_file() {
    let storage = spawn_storage(201);
    let uploader = StorageUploader::new(Duration::from_secs(2)).with_coalesce(true);

    let mut reader = UploadSource::from_reader(Cursor::new(b"streamed body".to_vec()), None);
    let size = uploader.put(&destination("1", &storage.url("/dev1/a.fid")), &mut reader).expect("put reader");
    assert_eq!(size, 13);

    let directory = tempfile::tempdir().expect("tempdir");
    let path = directory.path().join("upload.bin");
    std::fs::write(&path, vec![7u8; 100_000]).expect("write upload file");
    let size = uploader
        .put(&destination("1", &storage.url("/dev1/b.fid")), &mut UploadSource::File(path))
        .expect("put file");
    assert_eq!(size, 100_000);

    assert_eq!(storage.file("/dev1/a.fid"), Some(b"streamed body".to_vec()));
    assert_eq!(storage.file("/dev1/b.fid").map(|body| body.len()), Some(100_000));
}

#[test]
fn test_get_reads_exact_body() {
    let storage = spawn_storage(200);
    storage.insert("/dev1/file.fid", b"hello world");
    let downloader = StorageDownloader::new(Duration::from_secs(2));
    let url = StorageUrl::parse(&storage.url("/dev1/file.fid")).expect("valid url");

    let mut body = downloader.get(&url).expect("GET succeeds");
    assert_eq!(body.content_length(), 11);
    let mut data = Vec::new();
    body.read_to_end(&mut data).expect("read body");
    assert_eq!(data, b"hello world");
    assert_eq!(body.remaining(), 0);

    assert_eq!(downloader.size(&url).expect("HEAD succeeds"), 11);
}

#[test]
fn test_get_missing_file() {
    let storage = spawn_storage(200);
    let downloader = StorageDownloader::new(Duration::from_secs(2));
    let url = StorageUrl::parse(&storage.url("/dev1/missing.fid")).expect("valid url");

    assert!(matches!(downloader.get(&url), Err(MogileError::InvalidResponse(_))));
    assert!(matches!(downloader.size(&url), Err(MogileError::InvalidResponse(_))));
}

#[test]
fn test_put_rejects_stream_longer_than_declared() {
    let storage = spawn_storage(200);
    let uploader = StorageUploader::new(Duration::from_secs(2));

    let mut source = UploadSource::from_reader(Cursor::new(b"0123456789".to_vec()), Some(4));
    let result = uploader.put(&destination("1", &storage.url("/dev1/long.fid")), &mut source);

    match result {
        Err(MogileError::Io(error)) => assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput),
        other => panic!("expected an InvalidInput error, got {:?}", other),
    }
    assert!(storage.uploads().is_empty());
    assert_eq!(storage.file("/dev1/long.fid"), None);
}

#[test]
fn test_put_stream_shorter_than_declared() {
    let storage = spawn_storage(200);
    let uploader = StorageUploader::new(Duration::from_millis(500));

    let mut source = UploadSource::from_reader(Cursor::new(b"abc".to_vec()), Some(10));
    let result = uploader.put(&destination("1", &storage.url("/dev1/short.fid")), &mut source);

    match result {
        Err(MogileError::RequestTruncated { sent, expected }) => assert_eq!((sent, expected), (3, 10)),
        other => panic!("expected RequestTruncated, got {:?}", other),
    }
}
