//! Container data model and upload policy

use anyhow::{anyhow, Context, Result};
use std::path::Path;

// 8313b64 format constants
pub const CONTAINER_SUFFIX: &str = ".8313b64";
pub const CONTAINER_SUFFIX_LEN: usize = 8; // len(".8313b64")

/// Generic extension used when recovery finds no match
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Extensions accepted by the encode-side upload gate.
///
/// Policy only: it gates which files may be encoded, and can be bypassed
/// by renaming. It never affects the byte-level codec.
pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &[
    "png", "webp", "jpg", "jpeg", "gif", "avif", "mp3", "ogg", "aac", "wav",
    "csv", "svg", "html", "css", "js", "py", "pdf", "md", "mp4", "webm",
];

/// Extensions trusted directly from the file name at decode time.
///
/// These are textual formats with no reliable magic prefix; the bytes are
/// never inspected when the hinted name carries one of them.
pub const PASSTHROUGH_EXTENSIONS: &[&str] = &[
    "html", "css", "js", "py", "pdf", "md", "csv", "svg",
];

/// A file selected for encoding: raw bytes plus the original name.
///
/// The name is used only for extension hinting and for naming the container
/// artifact; it is never embedded in the container text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Original file name (no directory components expected)
    pub name: String,
    /// Raw file contents
    pub data: Vec<u8>,
}

impl SourceFile {
    /// Create a source file from in-memory data
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Read a source file from the filesystem
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .ok_or_else(|| anyhow!("Invalid filename: {}", path.display()))?
            .to_string_lossy()
            .to_string();

        Ok(Self { name, data })
    }

    /// Check this file against the upload allow-list.
    ///
    /// Returns an error naming the offending extension when the file is not
    /// eligible for encoding.
    pub fn validate_upload(&self) -> Result<()> {
        if is_allowed_upload(&self.name) {
            Ok(())
        } else {
            Err(anyhow!(
                "Unsupported file type: '{}' (extension '{}' is not in the upload allow-list)",
                self.name,
                extension_of(&self.name),
            ))
        }
    }

    /// Name of the container artifact for this file
    pub fn container_name(&self) -> String {
        container_name(&self.name)
    }
}

/// Extract the extension candidate from a file name.
///
/// Mirrors the container's hinting rule: the final dot-separated segment,
/// lowercased. A name without any dot yields the whole name.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Whether a file name passes the encode-side upload gate
pub fn is_allowed_upload(name: &str) -> bool {
    ALLOWED_UPLOAD_EXTENSIONS.contains(&extension_of(name).as_str())
}

/// Append the container suffix to an original file name
pub fn container_name(name: &str) -> String {
    format!("{}{}", name, CONTAINER_SUFFIX)
}

/// Strip the container suffix from a hinted file name.
///
/// Returns the name unchanged when the suffix is absent; the caller decides
/// whether a missing suffix is an error.
pub fn strip_container_suffix(name: &str) -> &str {
    name.strip_suffix(CONTAINER_SUFFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.PNG"), "png");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "readme");
    }

    #[test]
    fn test_upload_gate_rejects_exe() {
        let file = SourceFile::new("data.exe", vec![0u8; 8]);
        let result = file.validate_upload();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exe"));
    }

    #[test]
    fn test_upload_gate_accepts_png() {
        let file = SourceFile::new("data.png", vec![0u8; 8]);
        assert!(file.validate_upload().is_ok());
    }

    #[test]
    fn test_container_name_round_trip() {
        let name = container_name("photo.png");
        assert_eq!(name, "photo.png.8313b64");
        assert_eq!(strip_container_suffix(&name), "photo.png");
    }

    #[test]
    fn test_strip_without_suffix_is_identity() {
        assert_eq!(strip_container_suffix("photo.png"), "photo.png");
    }

    #[test]
    fn test_suffix_len_constant() {
        assert_eq!(CONTAINER_SUFFIX.len(), CONTAINER_SUFFIX_LEN);
    }
}
