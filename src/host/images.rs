use std::path::Path;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

/// Turns a file picked by the user into raw image bytes
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, path: &Path) -> AppResult<Vec<u8>>;
}

pub struct FsImageLoader;

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, path: &Path) -> AppResult<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        if data.is_empty() {
            return Err(AppError::InvalidImage(format!(
                "{} is empty",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), bytes = data.len(), "Image loaded");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G']).await.unwrap();

        let data = FsImageLoader.load(&path).await.unwrap();
        assert_eq!(data, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_rejects_empty_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.jpg");
        tokio::fs::write(&empty, b"").await.unwrap();

        assert!(matches!(
            FsImageLoader.load(&empty).await,
            Err(AppError::InvalidImage(_))
        ));
        assert!(matches!(
            FsImageLoader.load(&dir.path().join("missing.jpg")).await,
            Err(AppError::Io(_))
        ));
    }
}
