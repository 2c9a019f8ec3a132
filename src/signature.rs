//! Extension recovery from file signatures

use crate::container::{extension_of, FALLBACK_EXTENSION, PASSTHROUGH_EXTENSIONS};

/// A known binary signature: leading magic bytes and the canonical extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub magic: &'static [u8],
    pub extension: &'static str,
}

/// Ordered signature table; the first matching prefix wins.
///
/// JPEG has two alternate headers (JFIF and EXIF) and is checked first.
/// ID3 is a three-byte magic, so MP3 matches on a shorter prefix.
pub const SIGNATURES: &[Signature] = &[
    Signature { magic: &[0xFF, 0xD8, 0xFF, 0xE0], extension: ".jpg" },
    Signature { magic: &[0xFF, 0xD8, 0xFF, 0xE1], extension: ".jpg" },
    Signature { magic: &[0x89, 0x50, 0x4E, 0x47], extension: ".png" },
    Signature { magic: &[0x47, 0x49, 0x46, 0x38], extension: ".gif" },
    Signature { magic: &[0x52, 0x49, 0x46, 0x46], extension: ".wav" },
    Signature { magic: &[0x49, 0x44, 0x33], extension: ".mp3" },
    Signature { magic: &[0x4F, 0x67, 0x67, 0x53], extension: ".ogg" },
];

/// Match decoded bytes against the signature table.
///
/// Returns `None` when no known magic prefix matches.
pub fn sniff_extension(data: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|sig| data.starts_with(sig.magic))
        .map(|sig| sig.extension)
}

/// Recover the original extension for decoded bytes.
///
/// Rules, in order:
/// 1. A pass-through extension in the hinted name is trusted directly;
///    the bytes are not inspected.
/// 2. Otherwise the leading bytes are sniffed against [`SIGNATURES`].
/// 3. Unknown signatures fall back to the generic binary extension.
///
/// The returned extension includes the leading dot.
pub fn recover_extension(data: &[u8], hinted_name: &str) -> String {
    let candidate = extension_of(hinted_name);
    if PASSTHROUGH_EXTENSIONS.contains(&candidate.as_str()) {
        return format!(".{}", candidate);
    }

    sniff_extension(data)
        .unwrap_or(FALLBACK_EXTENSION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(sniff_extension(&data), Some(".png"));
    }

    #[test]
    fn test_sniff_both_jpeg_variants() {
        assert_eq!(sniff_extension(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some(".jpg"));
        assert_eq!(sniff_extension(&[0xFF, 0xD8, 0xFF, 0xE1, 0x00]), Some(".jpg"));
    }

    #[test]
    fn test_sniff_id3_three_byte_magic() {
        assert_eq!(sniff_extension(b"ID3\x04rest of tag"), Some(".mp3"));
    }

    #[test]
    fn test_sniff_unknown() {
        assert_eq!(sniff_extension(&[0x00, 0x01, 0x02, 0x03]), None);
    }

    #[test]
    fn test_sniff_short_input() {
        // Fewer bytes than any magic prefix never matches
        assert_eq!(sniff_extension(&[0xFF, 0xD8]), None);
        assert_eq!(sniff_extension(&[]), None);
    }

    #[test]
    fn test_passthrough_trusted_without_inspection() {
        // PNG bytes, but the hinted name says markdown
        let data = [0x89, 0x50, 0x4E, 0x47];
        assert_eq!(recover_extension(&data, "notes.md"), ".md");
    }

    #[test]
    fn test_signature_wins_over_mismatched_hint() {
        // Non-pass-through hint with PNG bytes recovers as PNG
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        assert_eq!(recover_extension(&data, "photo.webp"), ".png");
    }

    #[test]
    fn test_unknown_signature_falls_back_to_bin() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(recover_extension(&data, "mystery.dat"), ".bin");
    }
}
