//! File upload storage.
//!
//! Incoming files are classified by declared MIME type, validated before
//! anything touches the disk, and written under a kind-specific directory
//! with a generated name that never collides with concurrent uploads.
//! Removal is best-effort: entity cleanup must not fail a request because a
//! file is already gone.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use crate::error::{AppError, AppResult};

/// Size ceiling for blog attachments (image or PDF)
pub const BLOG_ATTACHMENT_LIMIT: usize = 10 * 1024 * 1024;
/// Size ceiling for the bare image upload endpoint
pub const IMAGE_UPLOAD_LIMIT: usize = 5 * 1024 * 1024;

/// Upload classification, keyed by the declared MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    /// Subdirectory under the upload root
    pub fn subdir(&self) -> &'static str {
        match self {
            UploadKind::Image => "images",
            UploadKind::Document => "documents",
        }
    }

    fn accepts(&self, content_type: &str) -> bool {
        match self {
            UploadKind::Image => content_type.starts_with("image/"),
            UploadKind::Document => content_type == "application/pdf",
        }
    }

    fn rejection_message(&self) -> &'static str {
        match self {
            UploadKind::Image => "Not an image! Please upload only images.",
            UploadKind::Document => "Not a PDF! Please upload only PDF documents.",
        }
    }
}

/// Generate a collision-resistant filename: field name, millisecond
/// timestamp, random suffix, original extension.
fn unique_filename(field: &str, original_filename: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    let ext = Path::new(original_filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    format!("{}-{}-{}{}", field, millis, suffix, ext)
}

#[derive(Clone)]
pub struct UploadService {
    root: PathBuf,
}

impl UploadService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding `images/` and `documents/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and persist one uploaded file, returning its public path
    /// (e.g. `/uploads/images/image-1722945600000-123456789.png`).
    ///
    /// Validation runs before the write, so a rejected upload leaves no
    /// partial file behind.
    pub async fn store(
        &self,
        kind: UploadKind,
        field: &str,
        original_filename: &str,
        content_type: &str,
        bytes: &[u8],
        limit: usize,
    ) -> AppResult<String> {
        if !kind.accepts(content_type) {
            return Err(AppError::UploadRejected(kind.rejection_message().to_string()));
        }

        if bytes.is_empty() {
            return Err(AppError::UploadRejected("Empty file".to_string()));
        }

        if bytes.len() > limit {
            return Err(AppError::UploadRejected(format!(
                "File too large. Maximum size is {}MB.",
                limit / (1024 * 1024)
            )));
        }

        let dir = self.root.join(kind.subdir());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {}", e)))?;

        let filename = unique_filename(field, original_filename);
        tokio::fs::write(dir.join(&filename), bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to save file: {}", e)))?;

        tracing::info!("Stored upload {} ({} bytes)", filename, bytes.len());

        Ok(format!("/uploads/{}/{}", kind.subdir(), filename))
    }

    /// Delete a previously stored file by its public path.
    ///
    /// Failures are swallowed: the file may already be gone, and cleanup
    /// must never turn into a request error. Paths outside the upload root
    /// are refused.
    pub async fn remove(&self, public_path: &str) {
        let Some(relative) = public_path.strip_prefix("/uploads/") else {
            tracing::warn!("Refusing to remove non-upload path: {}", public_path);
            return;
        };

        if relative.contains("..") || relative.contains('\\') || relative.contains('\0') {
            tracing::warn!("Refusing to remove suspicious path: {}", public_path);
            return;
        }

        let path = self.root.join(relative);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::debug!("Could not remove {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn service() -> (tempfile::TempDir, UploadService) {
        let dir = tempfile::tempdir().unwrap();
        let service = UploadService::new(dir.path());
        (dir, service)
    }

    #[tokio::test]
    async fn stores_image_under_images_dir() {
        let (dir, service) = service();
        let path = service
            .store(UploadKind::Image, "image", "beach.png", "image/png", b"png-bytes", IMAGE_UPLOAD_LIMIT)
            .await
            .unwrap();

        assert!(path.starts_with("/uploads/images/image-"));
        assert!(path.ends_with(".png"));

        let on_disk = dir.path().join(path.strip_prefix("/uploads/").unwrap());
        assert_eq!(std::fs::read(on_disk).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn rejects_image_under_document_field() {
        let (dir, service) = service();
        let err = service
            .store(UploadKind::Document, "document", "photo.png", "image/png", b"data", BLOG_ATTACHMENT_LIMIT)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UploadRejected(_)));
        // Rejection happens before the write: nothing on disk
        assert!(!dir.path().join("documents").exists());
    }

    #[tokio::test]
    async fn accepts_pdf_under_document_field() {
        let (_dir, service) = service();
        let path = service
            .store(UploadKind::Document, "document", "brochure.pdf", "application/pdf", b"%PDF-1.4", BLOG_ATTACHMENT_LIMIT)
            .await
            .unwrap();

        assert!(path.starts_with("/uploads/documents/document-"));
        assert!(path.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn rejects_oversized_file() {
        let (dir, service) = service();
        let big = vec![0u8; IMAGE_UPLOAD_LIMIT + 1];
        let err = service
            .store(UploadKind::Image, "image", "big.jpg", "image/jpeg", &big, IMAGE_UPLOAD_LIMIT)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UploadRejected(_)));
        assert!(!dir.path().join("images").exists());
    }

    #[tokio::test]
    async fn rejects_empty_file() {
        let (_dir, service) = service();
        let err = service
            .store(UploadKind::Image, "image", "empty.png", "image/png", b"", IMAGE_UPLOAD_LIMIT)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UploadRejected(_)));
    }

    #[test]
    fn generated_names_never_collide() {
        let names: HashSet<String> = (0..200)
            .map(|_| unique_filename("image", "sunset.jpg"))
            .collect();
        assert_eq!(names.len(), 200);
    }

    #[tokio::test]
    async fn concurrent_stores_get_distinct_paths() {
        let (_dir, service) = service();
        let (a, b) = tokio::join!(
            service.store(UploadKind::Image, "image", "same.jpg", "image/jpeg", b"one", IMAGE_UPLOAD_LIMIT),
            service.store(UploadKind::Image, "image", "same.jpg", "image/jpeg", b"two", IMAGE_UPLOAD_LIMIT),
        );
        assert_ne!(a.unwrap(), b.unwrap());
    }

    #[tokio::test]
    async fn remove_deletes_stored_file_and_tolerates_missing() {
        let (dir, service) = service();
        let path = service
            .store(UploadKind::Image, "image", "gone.png", "image/png", b"bytes", IMAGE_UPLOAD_LIMIT)
            .await
            .unwrap();

        let on_disk = dir.path().join(path.strip_prefix("/uploads/").unwrap());
        assert!(on_disk.exists());

        service.remove(&path).await;
        assert!(!on_disk.exists());

        // Second removal is a no-op, not a panic or error
        service.remove(&path).await;
    }

    #[tokio::test]
    async fn remove_refuses_path_traversal() {
        let (dir, service) = service();
        let outside = dir.path().parent().unwrap().join("victim.txt");
        std::fs::write(&outside, b"keep me").unwrap();

        service.remove("/uploads/../victim.txt").await;
        assert!(outside.exists());

        std::fs::remove_file(outside).ok();
    }
}
