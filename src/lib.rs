//! # b8313
//!
//! 8313b64 container format implementation.
//!
//! A container is the standard base64 encoding of a file's bytes, stored as
//! a text artifact named after the source file:
//!
//! ```text
//! photo.png  ->  photo.png.8313b64
//! ```
//!
//! ## Optional Compression
//!
//! The base64 text may additionally be run through a base64-safe LZ4
//! transform, so a compressed container is still plain base64 text. The
//! container carries no header: whether compression was applied is agreed
//! out of band, and the decoder must be configured with the matching flag.
//!
//! ## Extension Recovery
//!
//! Decoding recovers the original file extension from two sources:
//! - **Pass-through extensions** (textual formats such as `md`, `csv`,
//!   `svg`) are trusted directly from the hinted file name.
//! - Everything else is sniffed from the leading bytes against a fixed
//!   signature table (JPEG, PNG, GIF, WAV, MP3, OGG). Unknown signatures
//!   fall back to `.bin`.
//!
//! ## Upload Policy
//!
//! Encoding is gated by an extension allow-list. The gate is policy, not
//! a correctness mechanism: the codec itself accepts arbitrary bytes.

pub mod compress;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod signature;

pub use container::{
    container_name, extension_of, is_allowed_upload, strip_container_suffix, SourceFile,
    ALLOWED_UPLOAD_EXTENSIONS, CONTAINER_SUFFIX, FALLBACK_EXTENSION, PASSTHROUGH_EXTENSIONS,
};
pub use decoder::{Decoded, Decoder};
pub use encoder::Encoder;
pub use signature::{recover_extension, sniff_extension, Signature, SIGNATURES};
