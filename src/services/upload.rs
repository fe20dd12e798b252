use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

pub struct UploadService;

impl UploadService {
    /// Storage name for an uploaded file: millisecond timestamp, a unique
    /// suffix so same-millisecond uploads never collide, and the original
    /// name with unsafe characters stripped.
    pub fn storage_filename(original: &str) -> String {
        let safe = Self::sanitize(original);
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", Utc::now().timestamp_millis(), &suffix[..8], safe)
    }

    fn sanitize(name: &str) -> String {
        let safe: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
            .collect();
        // A leading dot would make the stored name hidden or dot-relative.
        let safe = safe.trim_start_matches('.').to_string();
        if safe.is_empty() {
            "file".to_string()
        } else {
            safe
        }
    }

    /// Write an upload under the public directory, creating the directory
    /// lazily when the first write fails. Returns the public-relative URL.
    pub async fn store(upload_dir: &str, original: &str, bytes: &[u8]) -> anyhow::Result<String> {
        let filename = Self::storage_filename(original);
        let path = PathBuf::from(upload_dir).join(&filename);

        if tokio::fs::write(&path, bytes).await.is_err() {
            tokio::fs::create_dir_all(upload_dir).await?;
            tokio::fs::write(&path, bytes).await?;
        }

        Ok(format!("/uploads/{}", filename))
    }
}
