//! Minimal HTTP/1.1 server standing in for one Maven mirror in integration tests.
//!
//! Serves a fixed path -> body map under `/maven2/`. Known paths get 200,
//! everything else gets `miss_status` (404 by default). Every requested path
//! is recorded so tests can assert which mirrors were tried.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const PREFIX: &str = "/maven2/";

pub struct MirrorServer {
    /// Base URL to configure as a repository, e.g. `http://127.0.0.1:PORT/maven2`.
    pub base: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MirrorServer {
    /// Starts a mirror serving `docs` (paths relative to the repository root).
    pub fn start(docs: &[(&str, &[u8])]) -> Self {
        Self::start_with(docs, 404)
    }

    /// Like `start` but answers unknown paths with `miss_status`.
    pub fn start_with(docs: &[(&str, &[u8])], miss_status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let docs: Arc<HashMap<String, Vec<u8>>> = Arc::new(
            docs.iter()
                .map(|(p, b)| (p.to_string(), b.to_vec()))
                .collect(),
        );
        let hits = Arc::new(Mutex::new(Vec::new()));
        let server_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let docs = Arc::clone(&docs);
                let hits = Arc::clone(&server_hits);
                thread::spawn(move || handle(stream, &docs, &hits, miss_status));
            }
        });
        MirrorServer {
            base: format!("http://127.0.0.1:{}/maven2", port),
            hits,
        }
    }

    /// Every path requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn hit_count(&self, path: &str) -> usize {
        self.hits.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

fn handle(
    mut stream: TcpStream,
    docs: &HashMap<String, Vec<u8>>,
    hits: &Mutex<Vec<String>>,
    miss_status: u16,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&request);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("");
    let path = target.strip_prefix(PREFIX).unwrap_or(target).to_string();
    hits.lock().unwrap().push(path.clone());

    let (status, body): (String, &[u8]) = match docs.get(&path) {
        Some(body) => ("200 OK".to_string(), body.as_slice()),
        None => (format!("{} Miss", miss_status), &b"miss"[..]),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/xml\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
