#![allow(dead_code)]
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use parking_lot::Mutex;
use mogilefs_client::config::structs::configuration::Configuration;

/// What the fake tracker does with one request line.
pub enum Reply {
    Line(String),
    Silence,
    Hangup,
}

pub fn ok(params: &str) -> Reply {
    Reply::Line(format!("OK 1 {}", params))
}

pub fn err(tag: &str, message: &str) -> Reply {
    Reply::Line(format!("ERR {} {}", tag, message))
}

pub struct FakeTracker {
    pub address: SocketAddr,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub connections: Arc<AtomicUsize>,
}

impl FakeTracker {
    pub fn host(&self) -> String {
        self.address.to_string()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn requests_for(&self, command: &str) -> Vec<String> {
        let prefix = format!("{} ", command);
        self.requests().into_iter().filter(|request| request.starts_with(&prefix)).collect()
    }
}

/// Line-oriented tracker on `127.0.0.1:0`, one thread per connection.
pub fn spawn_tracker<F>(handler: F) -> FakeTracker
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake tracker");
    let address = listener.local_addr().expect("fake tracker address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let connections = Arc::new(AtomicUsize::new(0));
    let handler = Arc::new(handler);

    let (thread_requests, thread_connections) = (Arc::clone(&requests), Arc::clone(&connections));
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            thread_connections.fetch_add(1, Ordering::SeqCst);
            let (requests, handler) = (Arc::clone(&thread_requests), Arc::clone(&handler));
            thread::spawn(move || serve_tracker(stream, requests, handler));
        }
    });

    FakeTracker { address, requests, connections }
}

fn serve_tracker<F>(stream: TcpStream, requests: Arc<Mutex<Vec<String>>>, handler: Arc<F>)
where
    F: Fn(&str) -> Reply,
{
    let mut writer = match stream.try_clone() {
        Ok(writer) => writer,
        Err(_) => return,
    };
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let request = line.trim_end_matches(['\r', '\n']).to_string();
        requests.lock().push(request.clone());
        match handler(&request) {
            Reply::Line(response) => {
                if writer.write_all(format!("{}\r\n", response).as_bytes()).is_err() {
                    return;
                }
            }
            Reply::Silence => {}
            Reply::Hangup => return,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub path: String,
    pub body: Vec<u8>,
}

pub struct FakeStorage {
    pub address: SocketAddr,
    pub files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub uploads: Arc<Mutex<Vec<Upload>>>,
}

impl FakeStorage {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub fn insert(&self, path: &str, data: &[u8]) {
        self.files.lock().insert(path.to_string(), data.to_vec());
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().clone()
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().get(path).cloned()
    }
}

/// HTTP/1.0 storage node answering `PUT` with `put_status`, `GET`/`HEAD`
/// from its file map (404 when missing).
pub fn spawn_storage(put_status: u16) -> FakeStorage {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake storage");
    let address = listener.local_addr().expect("fake storage address");
    let files = Arc::new(Mutex::new(HashMap::new()));
    let uploads = Arc::new(Mutex::new(Vec::new()));

    let (thread_files, thread_uploads) = (Arc::clone(&files), Arc::clone(&uploads));
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let (files, uploads) = (Arc::clone(&thread_files), Arc::clone(&thread_uploads));
            thread::spawn(move || serve_storage(stream, put_status, files, uploads));
        }
    });

    FakeStorage { address, files, uploads }
}

fn serve_storage(
    stream: TcpStream,
    put_status: u16,
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    uploads: Arc<Mutex<Vec<Upload>>>,
) {
    let Ok(mut writer) = stream.try_clone() else { return };
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }
    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).unwrap_or(0) == 0 {
            return;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut parts = request_line.split_whitespace();
    let (method, path) = (parts.next().unwrap_or_default(), parts.next().unwrap_or_default().to_string());
    let response = match method {
        "PUT" => {
            let mut body = vec![0u8; content_length];
            if reader.read_exact(&mut body).is_err() {
                return;
            }
            uploads.lock().push(Upload { path: path.clone(), body: body.clone() });
            if (200..300).contains(&put_status) {
                files.lock().insert(path, body);
            }
            format!("HTTP/1.0 {} Status\r\n\r\n", put_status).into_bytes()
        }
        "GET" | "HEAD" => match files.lock().get(&path) {
            Some(data) => {
                let mut response = format!("HTTP/1.0 200 OK\r\nContent-Length: {}\r\n\r\n", data.len()).into_bytes();
                if method == "GET" {
                    response.extend_from_slice(data);
                }
                response
            }
            None => b"HTTP/1.0 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_vec(),
        },
        _ => b"HTTP/1.0 400 Bad Request\r\n\r\n".to_vec(),
    };
    let _ = writer.write_all(&response);
}

/// A storage node that answers every request with `response` and then
/// keeps the connection open for `hold` without sending anything else.
pub fn spawn_raw_storage(response: &[u8], hold: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw storage");
    let address = listener.local_addr().expect("raw storage address");
    let response = Arc::new(response.to_vec());
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let response = Arc::clone(&response);
            thread::spawn(move || {
                let Ok(mut writer) = stream.try_clone() else { return };
                let mut reader = BufReader::new(stream);
                let mut line = String::new();
                loop {
                    line.clear();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => return,
                        Ok(_) if line.trim_end().is_empty() => break,
                        Ok(_) => {}
                    }
                }
                if writer.write_all(&response).is_ok() {
                    thread::sleep(hold);
                }
            });
        }
    });
    address
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    listener.local_addr().expect("probe address").port()
}

pub fn closed_host() -> String {
    format!("127.0.0.1:{}", closed_port())
}

/// A listener that accepts connections but never answers.
pub fn spawn_silent_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind silent listener");
    let address = listener.local_addr().expect("silent listener address");
    (listener, address)
}

pub fn create_test_config(tracker_host: &str) -> Configuration {
    let mut config = Configuration::init();
    config.tracker.hosts = vec![tracker_host.to_string()];
    config.tracker.domain = String::from("testdomain");
    config.tracker.timeout_ms = 2000;
    config.storage.get_file_data_timeout_ms = 2000;
    config.storage.upload_timeout_ms = 2000;
    config
}
