//! Minimal HTTP/1.1 server answering the image-type check for integration tests.
//!
//! Serves a fixed status and body for every request and records each request
//! target so tests can assert the query parameters that arrived.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub struct CheckServer {
    /// Check endpoint URL served by this instance.
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CheckServer {
    /// Request targets (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server answering 200 with `body` for every request. The server
/// runs until the process exits.
pub fn start(body: &str) -> CheckServer {
    start_with_status(200, body)
}

/// Like `start` but with a custom HTTP status (e.g. 500 for failure paths).
pub fn start_with_status(status: u32, body: &str) -> CheckServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let body = body.to_string();
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = body.clone();
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, status, &body, &seen));
        }
    });
    CheckServer {
        url: format!("http://127.0.0.1:{}/checkCustomImage", port),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, status: u32, body: &str, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    if let Some(target) = request_target(request) {
        seen.lock().unwrap().push(target.to_string());
    }
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn request_target(request: &str) -> Option<&str> {
    request.lines().next()?.split_whitespace().nth(1)
}
