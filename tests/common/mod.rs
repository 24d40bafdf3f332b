//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

use emoji_catalog_explorer::EmojiRecord;
use serde_json::json;
use tempfile::TempDir;

/// Builder for a catalog JSON file in a temporary directory
pub struct CatalogFileBuilder {
    temp_dir: TempDir,
    records: Vec<EmojiRecordBuilder>,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new() }
    }

    pub fn with_record(mut self, record: EmojiRecordBuilder) -> Self {
        self.records.push(record);
        self
    }

    /// Write the records as a JSON array and return (dir guard, file path)
    pub fn build(self) -> (TempDir, PathBuf) {
        let body = catalog_json(&self.records);
        let path = self.temp_dir.path().join("emojis.json");
        fs::write(&path, body).expect("Failed to write catalog file");
        (self.temp_dir, path)
    }

    /// Write arbitrary content (for malformed-body tests)
    pub fn build_raw(self, content: &str) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("emojis.json");
        fs::write(&path, content).expect("Failed to write catalog file");
        (self.temp_dir, path)
    }
}

impl Default for CatalogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one emoji object in a catalog body
#[derive(Clone)]
pub struct EmojiRecordBuilder {
    id: serde_json::Value,
    name: String,
    category: String,
    unicode: String,
    description: String,
}

impl EmojiRecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: json!(name.to_lowercase()),
            name: name.to_string(),
            category: "Smileys".to_string(),
            unicode: "😀".to_string(),
            description: format!("{} emoji", name),
        }
    }

    pub fn id(mut self, id: serde_json::Value) -> Self {
        self.id = id;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn unicode(mut self, unicode: &str) -> Self {
        self.unicode = unicode.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "name": self.name,
            "category": self.category,
            "unicode": self.unicode,
            "description": self.description,
        })
    }

    /// The record this JSON deserializes into
    pub fn to_record(&self) -> EmojiRecord {
        serde_json::from_value(self.to_json()).expect("builder produces valid records")
    }
}

pub fn catalog_json(records: &[EmojiRecordBuilder]) -> String {
    serde_json::Value::Array(records.iter().map(EmojiRecordBuilder::to_json).collect())
        .to_string()
}

/// The two records used by the search and category scenarios
pub fn scenario_records() -> Vec<EmojiRecordBuilder> {
    vec![
        EmojiRecordBuilder::new("Grinning")
            .category("Smileys")
            .description("A face with a big grin"),
        EmojiRecordBuilder::new("Heart").category("Love").unicode("❤️").description("Red heart"),
    ]
}

/// Serve exactly one HTTP response on a loopback port and return the URL to request
///
/// `status_line` is the part after `HTTP/1.1 `, e.g. `"404 Not Found"`.
pub fn serve_once(status_line: &str, body: &str) -> String {
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    serve_raw(response)
}

/// Like [`serve_once`] but without a Content-Length header; the body ends when the
/// connection closes
pub fn serve_once_unsized(status_line: &str, body: &str) -> String {
    serve_raw(format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{}",
        status_line, body
    ))
}

fn serve_raw(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request_head(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/emojis.json", addr)
}

fn read_request_head(stream: &mut impl Read) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).unwrap_or(0);
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
