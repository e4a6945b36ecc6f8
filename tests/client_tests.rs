mod common;

use std::time::Duration;
use mogilefs_client::client::structs::mogile_client::MogileClient;
use mogilefs_client::common::enums::mogile_error::MogileError;
use crate::common::{closed_port, create_test_config, err, ok, spawn_raw_storage, spawn_storage, spawn_tracker, Reply};

#[test]
fn test_store_content_fails_over_to_second_device() {
    let bad = spawn_storage(500);
    let good = spawn_storage(200);
    let (bad_path, good_path) = (bad.url("/dev1/0/000/000/0000000009.fid"), good.url("/dev2/0/000/000/0000000009.fid"));
    let tracker = spawn_tracker(move |line| {
        if line.starts_with("create_open ") {
            ok(&format!("fid=9&dev_count=2&devid_1=1&path_1={}&devid_2=2&path_2={}", bad_path, good_path))
        } else if line.starts_with("create_close ") {
            ok("")
        } else {
            err("unknown_command", "unexpected")
        }
    });
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    let size = client.store_content("greeting", Some("text"), "data").expect("store_content");

    assert_eq!(size, 4);
    assert_eq!(good.file("/dev2/0/000/000/0000000009.fid"), Some(b"data".to_vec()));
    let opens = tracker.requests_for("create_open");
    assert_eq!(opens, vec![String::from("create_open class=text&domain=testdomain&key=greeting&multi_dest=1")]);
    let closes = tracker.requests_for("create_close");
    assert_eq!(closes.len(), 1);
    assert!(closes[0].contains("devid=2&"), "got {}", closes[0]);
    assert!(closes[0].contains("fid=9&"), "got {}", closes[0]);
}

#[test]
fn test_store_file_single_destination() {
    let storage = spawn_storage(200);
    let path = storage.url("/dev4/x.fid");
    let tracker = spawn_tracker(move |line| {
        if line.starts_with("create_open ") {
            ok(&format!("fid=3&devid=4&path={}", path))
        } else {
            ok("")
        }
    });
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");
    let directory = tempfile::tempdir().expect("tempdir");
    let file = directory.path().join("payload");
    std::fs::write(&file, b"file payload").expect("write payload");

    assert_eq!(client.store_file("payload", None, &file).expect("store_file"), 12);
    assert_eq!(storage.file("/dev4/x.fid"), Some(b"file payload".to_vec()));
}

#[test]
fn test_new_file_rejects_bad_paths() {
    let tracker = spawn_tracker(|line| {
        if line.contains("key=empty") {
            ok("fid=1&devid=1&path=")
        } else {
            ok("fid=1&devid=1&path=ftp://example/file")
        }
    });
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    assert!(matches!(client.new_file("empty", None), Err(MogileError::EmptyPath)));
    match client.new_file("ftp", None) {
        Err(MogileError::UnsupportedPath(path)) => assert_eq!(path, "ftp://example/file"),
        other => panic!("expected UnsupportedPath, got {:?}", other),
    }
}

#[test]
fn test_get_file_data_skips_dead_replica() {
    let storage = spawn_storage(200);
    storage.insert("/dev2/file.fid", b"replica contents");
    let paths = format!(
        "paths=2&path1=http://127.0.0.1:{}/dev1/file.fid&path2={}",
        closed_port(),
        storage.url("/dev2/file.fid")
    );
    let tracker = spawn_tracker(move |_| ok(&paths));
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    let data = client.get_file_data("file").expect("get_file_data");
    assert_eq!(data, Some(b"replica contents".to_vec()));

    let mut sink = Vec::new();
    assert_eq!(client.read_file_to("file", &mut sink).expect("read_file_to"), Some(16));
    assert_eq!(sink, b"replica contents");

    assert_eq!(client.size("file").expect("size"), Some(16));
    assert_eq!(
        tracker.requests_for("get_paths")[0],
        "get_paths domain=testdomain&key=file&noverify=1"
    );
}

#[test]
fn test_get_file_data_without_replicas() {
    let tracker = spawn_tracker(|_| ok("paths=0"));
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    assert_eq!(client.get_file_data("nothing").expect("get_file_data"), None);
    assert_eq!(client.size("nothing").expect("size"), None);
}

#[test]
fn test_tracker_error_surfaces_and_reload_clears_it() {
    let tracker = spawn_tracker(|_| err("unknown_key", "unknown_key+nothing"));
    let mut client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    let error = client.get_paths("nothing").expect_err("unknown key");
    assert!(error.is_tracker_error("unknown_key"));
    assert_eq!(client.err().as_deref(), Some("unknown_key"));
    assert_eq!(client.errstr().as_deref(), Some("unknown_key nothing"));

    client.reload().expect("reload");
    assert_eq!(client.err(), None);
    assert_eq!(client.errstr(), None);
}

#[test]
fn test_delete_and_rename_requests() {
    let tracker = spawn_tracker(|_| ok(""));
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    client.delete("old key").expect("delete");
    client.rename("a", "b").expect("rename");

    assert_eq!(tracker.requests(), vec![
        String::from("delete domain=testdomain&key=old+key"),
        String::from("rename domain=testdomain&from_key=a&to_key=b"),
    ]);
}

#[test]
fn test_readonly_client_refuses_writes() {
    let tracker = spawn_tracker(|_| ok(""));
    let mut config = create_test_config(&tracker.host());
    config.tracker.readonly = true;
    let client = MogileClient::new(&config).expect("client");

    assert!(client.readonly());
    assert!(matches!(client.store_content("k", None, "v"), Err(MogileError::ReadOnly)));
    assert!(matches!(client.delete("k"), Err(MogileError::ReadOnly)));
    assert!(matches!(client.rename("k", "l"), Err(MogileError::ReadOnly)));
    assert!(tracker.requests().is_empty());
}

#[test]
fn test_list_keys_and_each_key() {
    let tracker = spawn_tracker(|line| {
        if !line.starts_with("list_keys ") {
            return Reply::Hangup;
        }
        if line.contains("after=c&") {
            err("none_match", "No+keys+match")
        } else if line.contains("after=b&") {
            ok("key_count=1&key_1=c&next_after=c")
        } else {
            ok("key_count=2&key_1=a&key_2=b&next_after=b")
        }
    });
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    let (keys, next) = client.list_keys("p", None, 10).expect("list_keys").expect("matches");
    assert_eq!(keys, vec![String::from("a"), String::from("b")]);
    assert_eq!(next.as_deref(), Some("b"));
    assert_eq!(client.list_keys("p", Some("c"), 10).expect("list_keys"), None);

    let mut seen = Vec::new();
    client.each_key("p", |key| seen.push(key.to_string())).expect("each_key");
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert!(tracker.requests_for("list_keys").iter().all(|request| request.contains("prefix=p")));
}

#[test]
fn test_sleep_forwards_duration() {
    let tracker = spawn_tracker(|_| ok(""));
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    client.sleep(0).expect("sleep");
    assert_eq!(tracker.requests(), vec![String::from("sleep duration=0")]);
}

#[test]
fn test_get_file_data_with_absurd_content_length() {
    let liar = spawn_raw_storage(
        b"HTTP/1.0 200 OK\r\nContent-Length: 18446744073709551615\r\n\r\nabc",
        Duration::ZERO,
    );
    let storage = spawn_storage(200);
    storage.insert("/dev2/k.fid", b"real contents");
    let paths = format!("paths=2&path1=http://{}/dev1/k.fid&path2={}", liar, storage.url("/dev2/k.fid"));
    let tracker = spawn_tracker(move |_| ok(&paths));
    let client = MogileClient::new(&create_test_config(&tracker.host())).expect("client");

    assert_eq!(client.get_file_data("k").expect("get_file_data"), Some(b"real contents".to_vec()));
}
