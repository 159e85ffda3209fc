//! Client-side file staging.
//!
//! Ordered, de-duplication-free collection of files selected for upload.
//! File constraints (MIME allowlist, size cap) are enforced at selection time
//! so a bad file never reaches the wire; rejected files surface a typed error
//! the caller can show and move on from.

use std::path::{Path, PathBuf};

use veridoc_core::constants::MAX_FILE_SIZE_BYTES;
use veridoc_core::models::UploadedFile;
use veridoc_core::validation;

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("{file_name}: only image and PDF files are supported (got '{content_type}')")]
    UnsupportedType {
        file_name: String,
        content_type: String,
    },

    #[error(
        "{file_name}: exceeds maximum allowed size of {} MB",
        MAX_FILE_SIZE_BYTES / 1024 / 1024
    )]
    TooLarge { file_name: String, size: usize },

    #[error("{}: unrecognized file extension", .path.display())]
    UnknownExtension { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Map a filename extension to the MIME type used when staging from disk.
fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Ordered staging collection. Newly accepted files append; removal is by
/// position. Order is preserved through submission.
#[derive(Debug, Clone, Default)]
pub struct StagedFiles {
    files: Vec<UploadedFile>,
}

impl StagedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an in-memory file. Rejects unsupported MIME types and files over
    /// the size cap without modifying the collection.
    pub fn add(&mut self, file: UploadedFile) -> Result<(), StagingError> {
        if validation::validate_content_type(&file.content_type).is_err() {
            return Err(StagingError::UnsupportedType {
                file_name: file.file_name,
                content_type: file.content_type,
            });
        }
        if validation::validate_file_size(file.size()).is_err() {
            return Err(StagingError::TooLarge {
                size: file.size(),
                file_name: file.file_name,
            });
        }

        self.files.push(file);
        Ok(())
    }

    /// Stage a file from disk, inferring its MIME type from the extension.
    pub fn stage_path(&mut self, path: &Path) -> Result<(), StagingError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let content_type =
            content_type_for_extension(extension).ok_or_else(|| StagingError::UnknownExtension {
                path: path.to_path_buf(),
            })?;

        let data = std::fs::read(path).map_err(|source| StagingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();

        self.add(UploadedFile::new(file_name, content_type, data))
    }

    /// Remove the file at the given position, if any.
    pub fn remove(&mut self, index: usize) -> Option<UploadedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Drop all staged files (called after a successful submission).
    pub fn clear(&mut self) {
        self.files.clear();
    }
}
