//! Source handler trait

use async_trait::async_trait;

use crate::Result;

/// Text handed to the scanner, with where it came from
#[derive(Debug, Clone)]
pub struct Input {
    pub label: String,
    pub content: String,
    pub content_hash: String,
}

impl Input {
    pub fn new(label: impl Into<String>, content: String) -> Self {
        let content_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
        Self {
            label: label.into(),
            content,
            content_hash,
        }
    }
}

/// Trait for handling different source types
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// Read the content behind `uri`
    async fn load(&self, uri: &str) -> Result<Input>;

    /// Check if this handler can handle the given URI
    fn can_handle(&self, uri: &str) -> bool;
}
