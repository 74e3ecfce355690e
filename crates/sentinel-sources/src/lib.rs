pub mod error;
pub mod file;
pub mod handler;
pub mod stdin;
pub mod text;

pub use error::{Result, SourceError};
pub use file::FileHandler;
pub use handler::{Input, SourceHandler};
pub use stdin::StdinHandler;
pub use text::TextHandler;

/// Registry of source handlers, consulted in order
pub struct SourceHandlerRegistry {
    handlers: Vec<Box<dyn SourceHandler>>,
}

impl SourceHandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![
                Box::new(StdinHandler),
                Box::new(TextHandler),
                // Bare paths fall through to the file handler
                Box::new(FileHandler),
            ],
        }
    }

    /// Load the input named by `uri` using the first handler that accepts it
    pub async fn load(&self, uri: &str) -> Result<Input> {
        for handler in &self.handlers {
            if handler.can_handle(uri) {
                return handler.load(uri).await;
            }
        }

        Err(SourceError::InvalidSourceUri(uri.to_string()))
    }

    /// Load several inputs, stopping at the first failure
    pub async fn load_all(&self, uris: &[String]) -> Result<Vec<Input>> {
        let mut inputs = Vec::with_capacity(uris.len());
        for uri in uris {
            inputs.push(self.load(uri).await?);
        }
        Ok(inputs)
    }
}

impl Default for SourceHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
