//! Command handlers for the Wayfarer CLI.

pub mod config;
pub mod describe;
pub mod interactive;
mod render;

use anyhow::Context;
use std::path::Path;
use wayfarer_core::config::UploadConfig;

/// Read a local image for upload, enforcing the configured extension allow-list.
pub(crate) fn read_upload(path: &Path, upload: &UploadConfig) -> anyhow::Result<Vec<u8>> {
    if !upload.accepts(path) {
        anyhow::bail!(
            "Unsupported file type: {} (allowed: {})",
            path.display(),
            upload.allowed_extensions.join(", ")
        );
    }
    if !path.is_file() {
        anyhow::bail!("File not found: {}", path.display());
    }

    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_upload_accepts_allowed_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Louvre.JPG");
        std::fs::write(&path, b"bytes").unwrap();

        let bytes = read_upload(&path, &UploadConfig::default()).unwrap();
        assert_eq!(bytes, b"bytes");
    }

    #[test]
    fn test_read_upload_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let err = read_upload(&path, &UploadConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn test_read_upload_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_upload(&dir.path().join("gone.png"), &UploadConfig::default()).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
