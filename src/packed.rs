//! One-shot zlib + URL-safe base64 codec.
//!
//! Unlike the stepped pipeline this takes no random parameters, so the output
//! is fully self-describing and needs no metadata.

use crate::error::{Result, TextveilError};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress text with zlib and encode it as URL-safe base64
pub fn pack(text: &str) -> Result<String> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(URL_SAFE.encode(compressed))
}

/// Decode URL-safe base64 and decompress with zlib
pub fn unpack(data: &str) -> Result<String> {
    let compressed = URL_SAFE
        .decode(data)
        .map_err(|e| TextveilError::Decode(format!("base64: {}", e)))?;
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut text = String::new();
    decoder
        .read_to_string(&mut text)
        .map_err(|e| TextveilError::Decode(format!("zlib: {}", e)))?;
    Ok(text)
}
