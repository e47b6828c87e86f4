//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use artwork_browser::catalog::{CatalogError, CatalogSource, PageRequest};
use artwork_browser::models::{Artwork, ArtworkPage};

/// Builder for artwork records in API JSON form
pub struct ArtworkJsonBuilder {
    id: u64,
    title: Option<String>,
    artist_title: Option<String>,
    date_display: Option<String>,
}

impl ArtworkJsonBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: Some(format!("Artwork {}", id)),
            artist_title: Some(format!("Artist {}", id)),
            date_display: Some("1900".to_string()),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn artist(mut self, artist: &str) -> Self {
        self.artist_title = Some(artist.to_string());
        self
    }

    /// Send `artist_title: null`, as the API does for anonymous works
    pub fn no_artist(mut self) -> Self {
        self.artist_title = None;
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "title": self.title,
            "artist_title": self.artist_title,
            "date_display": self.date_display,
        })
    }
}

/// Full `/artworks` response body
pub fn page_body(records: &[ArtworkJsonBuilder], total: u64) -> String {
    let data: Vec<serde_json::Value> = records.iter().map(|r| r.to_json()).collect();
    serde_json::json!({
        "pagination": {"total": total, "limit": records.len(), "offset": 0, "current_page": 1},
        "data": data,
        "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
    })
    .to_string()
}

pub fn artwork(id: u64) -> Artwork {
    Artwork::new(id, format!("Artwork {}", id), format!("Artist {}", id), "1900")
}

pub fn artworks(ids: &[u64]) -> Vec<Artwork> {
    ids.iter().map(|&id| artwork(id)).collect()
}

/// In-memory catalog: page N of size L holds ids (N-1)*L+1 ..= N*L
pub struct FakeCatalog {
    pub total: u64,
    pub requests: Mutex<Vec<PageRequest>>,
}

impl FakeCatalog {
    pub fn new(total: u64) -> Arc<Self> {
        Arc::new(Self { total, requests: Mutex::new(Vec::new()) })
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests.lock().unwrap().iter().map(|r| r.page).collect()
    }
}

impl CatalogSource for FakeCatalog {
    fn fetch_page(&self, request: &PageRequest) -> Result<ArtworkPage, CatalogError> {
        self.requests.lock().unwrap().push(*request);
        let start = u64::from(request.page - 1) * u64::from(request.limit) + 1;
        let end = (start + u64::from(request.limit)).min(self.total + 1);
        let ids: Vec<u64> = (start..end).collect();
        Ok(ArtworkPage { records: artworks(&ids), total: self.total })
    }
}

/// Minimal HTTP/1.1 server answering a fixed list of responses in order,
/// one per connection
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    pub fn serve(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read stub address");

        let handle = thread::spawn(move || {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("Failed to accept connection");
                let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));

                let mut request_line = String::new();
                reader.read_line(&mut request_line).expect("Failed to read request line");
                request_lines.push(request_line.trim_end().to_string());

                // Drain headers
                loop {
                    let mut header = String::new();
                    let read = reader.read_line(&mut header).expect("Failed to read header");
                    if read == 0 || header == "\r\n" {
                        break;
                    }
                }

                let response = format!(
                    "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).expect("Failed to write response");
                stream.flush().expect("Failed to flush response");
            }
            request_lines
        });

        Self { url: format!("http://{}/api/v1/artworks", addr), handle }
    }

    /// Wait for every response to be served and return the request lines seen
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("Stub server panicked")
    }
}

/// Accepts one connection and never answers it. The connection is held open
/// until the server is dropped.
pub struct SilentServer {
    pub url: String,
    _release: Sender<()>,
}

impl SilentServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind silent server");
        let addr = listener.local_addr().expect("Failed to read silent server address");
        let (release, held) = mpsc::channel::<()>();

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                // Returns once the sender is dropped
                let _ = held.recv();
                drop(stream);
            }
        });

        Self { url: format!("http://{}/api/v1/artworks", addr), _release: release }
    }
}

/// URL of a port with nothing listening on it
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read address");
    drop(listener);
    format!("http://{}/api/v1/artworks", addr)
}
