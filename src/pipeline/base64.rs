//! Standard base64 over the UTF-8 bytes of the text.

use crate::error::{Result, TextveilError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode the UTF-8 bytes of `text` as standard base64
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard base64 back into text
pub fn decode_text(text: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(text)
        .map_err(|e| TextveilError::Decode(format!("base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| TextveilError::Decode(format!("utf-8: {}", e)))
}
