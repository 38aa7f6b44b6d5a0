//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes are matched by method and exact path (query string ignored). Every
//! request is recorded so tests can assert which upstream calls were made.

use std::io::Read;
use std::io::Write;
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

#[derive(Clone)]
pub struct StubRoute {
    pub method: &'static str,
    pub path: String,
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubRoute {
    pub fn json(method: &'static str, path: &str, body: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            status: "200 OK",
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(path: &str, body: Vec<u8>) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            status: "200 OK",
            content_type: "application/zip",
            body,
        }
    }
}

pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Starts a server in a background thread serving `routes`. Returns the base
/// URL (no trailing slash) and the request log. The server runs until the
/// process exits.
pub fn start(routes: Vec<StubRoute>) -> (String, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let handler_log = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&handler_log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    (format!("http://127.0.0.1:{}", port), log)
}

fn handle(mut stream: std::net::TcpStream, routes: &[StubRoute], log: &RequestLog) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 16384];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let mut parts = request.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("").to_string();
    let path = target.split('?').next().unwrap_or("").to_string();

    log.lock().unwrap().push(format!("{} {}", method, target));

    match routes.iter().find(|r| r.method == method && r.path == path) {
        Some(route) => {
            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                route.status,
                route.content_type,
                route.body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&route.body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}
