//! Minimal HTTP/1.1 catalog server for integration tests.
//!
//! Serves `POST /tags`, `GET /search` (scripted replies, in order) and
//! `GET /cards/<name>` (static card bytes). Every request line is recorded.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Default)]
struct ServerState {
    tags: Option<(u16, String)>,
    search_replies: VecDeque<(u16, String)>,
    cards: HashMap<String, Vec<u8>>,
    requests: Vec<String>,
}

#[derive(Clone)]
pub struct CatalogServer {
    base: String,
    state: Arc<Mutex<ServerState>>,
}

impl CatalogServer {
    /// Starts the server on an ephemeral port. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(ServerState::default()));
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let state = Arc::clone(&shared);
                thread::spawn(move || handle(stream, &state));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            state,
        }
    }

    pub fn search_endpoint(&self) -> String {
        format!("{}/search", self.base)
    }

    pub fn tags_endpoint(&self) -> String {
        format!("{}/tags", self.base)
    }

    pub fn card_url(&self, name: &str) -> String {
        format!("{}/cards/{}", self.base, name)
    }

    pub fn set_tags(&self, status: u16, body: &str) {
        self.state.lock().unwrap().tags = Some((status, body.to_string()));
    }

    pub fn push_search(&self, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .search_replies
            .push_back((status, body.to_string()));
    }

    pub fn add_card(&self, name: &str, bytes: Vec<u8>) {
        self.state.lock().unwrap().cards.insert(name.to_string(), bytes);
    }

    /// Request lines seen so far, e.g. `GET /search?page=1&first=10&nsfw=false`.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn search_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with("GET /search"))
            .collect()
    }
}

fn handle(mut stream: TcpStream, state: &Mutex<ServerState>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let (method, target) = {
        let mut parts = request.split_whitespace();
        (
            parts.next().unwrap_or("").to_string(),
            parts.next().unwrap_or("").to_string(),
        )
    };

    let (status, content_type, body) = {
        let mut st = state.lock().unwrap();
        st.requests.push(format!("{} {}", method, target));
        route(&mut st, &method, &target)
    };

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        content_type,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}

fn route(st: &mut ServerState, method: &str, target: &str) -> (u16, &'static str, Vec<u8>) {
    let path = target.split('?').next().unwrap_or("");
    const JSON: &str = "application/json";
    match (method, path) {
        ("POST", "/tags") => {
            let (status, body) = st
                .tags
                .clone()
                .unwrap_or((200, r#"{"tags": []}"#.to_string()));
            (status, JSON, body.into_bytes())
        }
        ("GET", "/search") => {
            let (status, body) = st
                .search_replies
                .pop_front()
                .unwrap_or((200, r#"{"data": {"nodes": []}}"#.to_string()));
            (status, JSON, body.into_bytes())
        }
        ("GET", p) if p.starts_with("/cards/") => match st.cards.get(&p["/cards/".len()..]) {
            Some(bytes) => (200, "image/png", bytes.clone()),
            None => (404, "text/plain", b"not found".to_vec()),
        },
        _ => (405, "text/plain", Vec::new()),
    }
}

/// Reads headers and, if announced, the body. Returns the header block.
fn read_request(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let mut have = buf.len() - header_end;
    while have < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        have += n;
    }
    Some(head)
}
