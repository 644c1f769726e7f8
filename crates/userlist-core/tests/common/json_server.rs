//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with a canned reply. With several replies they are
//! served in order and the last one repeats. `start_silent` accepts
//! connections and never answers.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: String,
    /// Sent as a `Location` header when set.
    pub location: Option<String>,
}

impl Reply {
    /// 200 with a collection+JSON body.
    pub fn collection(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "application/vnd.collection+json",
            body: body.to_string(),
            location: None,
        }
    }

    pub fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
            location: None,
        }
    }

    /// 302 pointing at `location`.
    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 FOUND",
            content_type: "text/html",
            body: String::new(),
            location: Some(location.to_string()),
        }
    }
}

/// Handle to a running server: base URL plus a counter of requests seen.
pub struct Server {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl Server {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(reply: Reply) -> Server {
    start_sequence(vec![reply])
}

pub fn start_sequence(replies: Vec<Reply>) -> Server {
    assert!(!replies.is_empty(), "need at least one reply");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let replies = Arc::new(replies);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let reply = replies[n.min(replies.len() - 1)].clone();
            thread::spawn(move || handle(stream, &reply));
        }
    });
    Server {
        url: format!("http://127.0.0.1:{}/project/api/users/", port),
        hits,
    }
}

/// Server that accepts connections and never replies.
/// Connections are held open until the process exits.
pub fn start_silent() -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            held.push(stream);
        }
    });
    Server {
        url: format!("http://127.0.0.1:{}/project/api/users/", port),
        hits,
    }
}

/// URL of a port nobody listens on (connection refused).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/project/api/users/", port)
}

fn handle(mut stream: TcpStream, reply: &Reply) {
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
    let location = reply
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        reply.status,
        reply.content_type,
        reply.body.len(),
        location,
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
}
