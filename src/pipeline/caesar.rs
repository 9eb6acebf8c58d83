//! Caesar shift cipher over the ASCII alphabets.
//!
//! Rotates letters within their own case's 26-letter range; everything else
//! passes through untouched, so punctuation and non-ASCII text survive intact.

/// Shift each ASCII letter forward by `shift` positions (mod 26)
pub fn shift_text(text: &str, shift: u8) -> String {
    text.chars().map(|ch| shift_char(ch, shift)).collect()
}

/// Undo a forward shift by rotating through the rest of the alphabet
pub fn unshift_text(text: &str, shift: u8) -> String {
    shift_text(text, 26 - (shift % 26))
}

fn shift_char(ch: char, shift: u8) -> char {
    let shift = shift % 26;
    match ch {
        'a'..='z' => ((ch as u8 - b'a' + shift) % 26 + b'a') as char,
        'A'..='Z' => ((ch as u8 - b'A' + shift) % 26 + b'A') as char,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(shift_text("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(unshift_text("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn test_roundtrip_all_shifts() {
        let text = "The quick brown fox Jumps Over the LAZY dog 123!";
        for shift in 1..=25 {
            let shifted = shift_text(text, shift);
            assert_ne!(shifted, text);
            assert_eq!(unshift_text(&shifted, shift), text);
        }
    }

    #[test]
    fn test_case_preserved() {
        let shifted = shift_text("aAzZ", 1);
        assert_eq!(shifted, "bBaA");
    }

    #[test]
    fn test_non_letters_untouched() {
        let text = "0123 ,.!? \t\n éü漢";
        assert_eq!(shift_text(text, 13), text);
    }

    #[test]
    fn test_wraps_within_alphabet() {
        // Every shifted character must still be a letter of the same case
        let shifted = shift_text("xyzXYZ", 5);
        assert_eq!(shifted, "cdeCDE");
    }
}
