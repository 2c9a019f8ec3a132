//! Base64-safe text compression transform
//!
//! The compressed form of a container is itself base64 text: the base64
//! payload is LZ4-compressed and the compressed bytes are re-encoded as
//! standard base64. Both directions are exact inverses, so a container
//! survives the transform bit-for-bit as long as encode and decode agree
//! on whether it was applied.

use anyhow::{anyhow, Result};
use base64::Engine;

/// Compress base64 container text into another base64-safe string
pub fn compress_text(text: &str) -> String {
    let compressed = lz4_flex::compress_prepend_size(text.as_bytes());
    base64::engine::general_purpose::STANDARD.encode(compressed)
}

/// Invert [`compress_text`].
///
/// Fails when the input is not valid base64, not valid LZ4 data, or does
/// not decompress to UTF-8 text. All three cases mean the container is
/// corrupted or was never compressed.
pub fn decompress_text(text: &str) -> Result<String> {
    let compressed = base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| anyhow!("Corrupted container: invalid compressed text ({})", e))?;

    let decompressed = lz4_flex::decompress_size_prepended(&compressed)
        .map_err(|e| anyhow!("Corrupted container: decompression failed ({})", e))?;

    String::from_utf8(decompressed)
        .map_err(|_| anyhow!("Corrupted container: decompressed payload is not text"))
}
