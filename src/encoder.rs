//! 8313b64 container encoder

use crate::compress::compress_text;
use crate::container::SourceFile;
use anyhow::Result;
use base64::Engine;

/// Encodes raw bytes into 8313b64 container text
pub struct Encoder {
    /// Whether to apply the base64-safe compression transform
    compress: bool,
}

impl Encoder {
    /// Create a new encoder without compression
    pub fn new() -> Self {
        Self { compress: false }
    }

    /// Enable or disable the compression transform
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Encode raw bytes to container text.
    ///
    /// Pure transform: standard base64 of the bytes, then the compression
    /// transform when enabled. The output decodes back to the input when
    /// the decoder is configured with the same compression flag.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let base64 = base64::engine::general_purpose::STANDARD.encode(data);

        if self.compress {
            Ok(compress_text(&base64))
        } else {
            Ok(base64)
        }
    }

    /// Encode a source file, enforcing the upload allow-list first.
    ///
    /// This is the gate of the encode action: a file whose name carries a
    /// disallowed extension is rejected before any encoding happens.
    pub fn encode_source(&self, source: &SourceFile) -> Result<String> {
        source.validate_upload()?;
        self.encode(&source.data)
    }

    /// Encode bytes directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, data: &[u8], mut writer: W) -> Result<()> {
        let encoded = self.encode(data)?;
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Encode bytes to a container file at the given path
    pub fn encode_to_file(&self, data: &[u8], path: &std::path::Path) -> Result<()> {
        let encoded = self.encode(data)?;
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
