//! Byte-XOR over Unicode scalar values.
//!
//! Each character's code point is XORed with a key in [1, 255], so only the
//! low byte of the code point flips. The transform is its own inverse.
//! Reassembly goes through a checked conversion: a key below 256 cannot move
//! a non-surrogate code point into the surrogate block or past `char::MAX`,
//! so the error arm only fires for metadata edited by hand.

use crate::error::{Result, TextveilError};

/// XOR every character's code point with `key`. Self-inverse.
pub fn xor_text(text: &str, key: u8) -> Result<String> {
    text.chars()
        .map(|ch| {
            let code = ch as u32 ^ u32::from(key);
            char::from_u32(code).ok_or_else(|| {
                TextveilError::Decode(format!("xor produced invalid code point U+{:04X}", code))
            })
        })
        .collect()
}
