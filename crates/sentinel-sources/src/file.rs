use async_trait::async_trait;

use crate::handler::{Input, SourceHandler};
use crate::{Result, SourceError};

/// Files on disk: `file:<path>` or a bare path
pub struct FileHandler;

#[async_trait]
impl SourceHandler for FileHandler {
    async fn load(&self, uri: &str) -> Result<Input> {
        let path = uri.strip_prefix("file:").unwrap_or(uri);
        if path.is_empty() {
            return Err(SourceError::InvalidSourceUri(uri.to_string()));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Read {
                path: path.to_string(),
                source,
            })?;

        Ok(Input::new(path, content))
    }

    fn can_handle(&self, uri: &str) -> bool {
        // Any URI without another handler's scheme is treated as a path
        !uri.starts_with("text:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.txt");
        std::fs::write(&path, "ABCDE1234F").unwrap();

        let input = FileHandler
            .load(&format!("file:{}", path.display()))
            .await
            .unwrap();

        assert_eq!(input.content, "ABCDE1234F");
        assert_eq!(input.label, path.display().to_string());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = FileHandler.load("file:/no/such/file").await.unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[tokio::test]
    async fn test_empty_path() {
        assert!(FileHandler.load("file:").await.is_err());
    }
}
