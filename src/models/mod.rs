//! Data models for the library server

pub mod book;
pub mod reader;
pub mod record;

use serde::Serialize;
use utoipa::ToSchema;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookSearchQuery, BookSearchResponse, CreateBook, UpdateBook};
pub use reader::{CreateReader, Reader, UpdateReader};
pub use record::{CreateRecord, Record, RecordKey, UpdateRecord};

/// Keys are stored unpadded; surrounding whitespace is never significant.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_string()
}

/// Turn a user keyword into a LIKE pattern matching it as a literal substring
pub fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Plain acknowledgement returned by update and delete
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
