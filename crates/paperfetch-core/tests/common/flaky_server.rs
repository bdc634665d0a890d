//! Minimal HTTP/1.1 server for integration tests that fails before it succeeds.
//!
//! Serves a fixed set of documents by path. The first `fail_first` requests
//! are answered with `fail_status` regardless of path; unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct FlakyServerOptions {
    /// Number of initial requests that fail.
    pub fail_first: u32,
    /// Status used for the failing requests.
    pub fail_status: u16,
}

impl Default for FlakyServerOptions {
    fn default() -> Self {
        Self {
            fail_first: 0,
            fail_status: 503,
        }
    }
}

pub struct FlakyServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    hits: Arc<AtomicU32>,
}

impl FlakyServer {
    /// Requests received so far (all paths).
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. `docs` maps request path
/// (without leading slash, e.g. "p1.pdf") to body. Runs until the process exits.
pub fn start(docs: HashMap<String, Vec<u8>>, opts: FlakyServerOptions) -> FlakyServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let docs = Arc::new(docs);
    let hits = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let docs = Arc::clone(&docs);
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            thread::spawn(move || handle(stream, &docs, n, opts));
        }
    });
    FlakyServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, docs: &HashMap<String, Vec<u8>>, n: u32, opts: FlakyServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let len = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(len) => len,
    };
    let request = String::from_utf8_lossy(&buf[..len]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .trim_start_matches('/');

    if n <= opts.fail_first {
        respond(&mut stream, &format!("{} Failing", opts.fail_status), b"");
        return;
    }
    match docs.get(path) {
        Some(body) => respond(&mut stream, "200 OK", body),
        None => respond(&mut stream, "404 Not Found", b""),
    }
}

fn respond(stream: &mut TcpStream, status: &str, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
