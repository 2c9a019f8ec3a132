//! 8313b64 container decoder

use crate::compress::decompress_text;
use crate::container::strip_container_suffix;
use crate::signature::recover_extension;
use anyhow::{anyhow, Result};
use base64::Engine;

/// Result of decoding a container: original bytes plus recovered naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The original file bytes
    pub data: Vec<u8>,
    /// Recovered extension, leading dot included (`.bin` when unknown)
    pub extension: String,
    /// Output file name: the hinted name with the container suffix
    /// stripped and the recovered extension appended
    pub file_name: String,
}

/// Decodes 8313b64 container text back into the original bytes
pub struct Decoder {
    /// Whether to invert the compression transform before base64 decoding
    decompress: bool,
}

impl Decoder {
    /// Create a new decoder without decompression
    pub fn new() -> Self {
        Self { decompress: false }
    }

    /// Enable or disable the decompression step
    pub fn with_decompression(mut self, decompress: bool) -> Self {
        self.decompress = decompress;
        self
    }

    /// Decode container text using the original file name as a hint.
    ///
    /// The hint drives extension recovery only; the bytes come entirely
    /// from the container text. The container carries no header, so the
    /// decompression flag must match the flag used at encode time.
    pub fn decode(&self, container: &str, name_hint: &str) -> Result<Decoded> {
        // Containers may have picked up line breaks in transit
        let text = Self::filter_container_text(container);

        let base64 = if self.decompress {
            decompress_text(&text)?
        } else {
            text
        };

        let data = base64::engine::general_purpose::STANDARD
            .decode(&base64)
            .map_err(|e| anyhow!("Failed to decode container as base64: {}", e))?;

        let original_name = strip_container_suffix(name_hint);
        let extension = recover_extension(&data, original_name);
        let file_name = format!("{}{}", original_name, extension);

        Ok(Decoded {
            data,
            extension,
            file_name,
        })
    }

    /// Decode container text and write the recovered bytes into a directory.
    ///
    /// Returns the decoded result; `file_name` names the written file.
    /// Nothing is written when decoding fails.
    pub fn decode_to_dir(
        &self,
        container: &str,
        name_hint: &str,
        directory: &std::path::Path,
    ) -> Result<Decoded> {
        let decoded = self.decode(container, name_hint)?;
        let output_path = directory.join(&decoded.file_name);
        std::fs::write(&output_path, &decoded.data)?;
        Ok(decoded)
    }

    /// Strip newlines and carriage returns from container text
    fn filter_container_text(container: &str) -> String {
        container
            .chars()
            .filter(|&c| c != '\n' && c != '\r')
            .collect()
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
