use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::Result;
use crate::handler::{Input, SourceHandler};

/// Standard input: `-`
pub struct StdinHandler;

#[async_trait]
impl SourceHandler for StdinHandler {
    async fn load(&self, _uri: &str) -> Result<Input> {
        let mut content = String::new();
        tokio::io::stdin().read_to_string(&mut content).await?;
        Ok(Input::new("stdin", content))
    }

    fn can_handle(&self, uri: &str) -> bool {
        uri == "-"
    }
}
