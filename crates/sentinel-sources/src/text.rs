use async_trait::async_trait;

use crate::handler::{Input, SourceHandler};
use crate::{Result, SourceError};

/// Inline text: `text:<content>`
pub struct TextHandler;

#[async_trait]
impl SourceHandler for TextHandler {
    async fn load(&self, uri: &str) -> Result<Input> {
        let content = uri
            .strip_prefix("text:")
            .ok_or_else(|| SourceError::InvalidSourceUri(format!("Invalid text URI: {}", uri)))?;

        Ok(Input::new("text", content.to_string()))
    }

    fn can_handle(&self, uri: &str) -> bool {
        uri.starts_with("text:")
    }
}
