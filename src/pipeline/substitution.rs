//! Random substitution cipher over printable ASCII.
//!
//! The mapping is a bijection over the 95 printable ASCII characters
//! (code points 32..=126). Characters outside that range pass through
//! unmapped, so the cipher composes safely with transforms that emit
//! control characters or non-ASCII text.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Printable ASCII range covered by the mapping
pub const DOMAIN_START: u8 = 32;
pub const DOMAIN_END: u8 = 126;

/// Number of characters in the substitution domain
pub const DOMAIN_SIZE: usize = (DOMAIN_END - DOMAIN_START + 1) as usize;

/// Generate a fresh random bijection over printable ASCII
pub fn random_mapping<R: Rng + ?Sized>(rng: &mut R) -> BTreeMap<char, char> {
    let domain: Vec<char> = (DOMAIN_START..=DOMAIN_END).map(char::from).collect();
    let mut image = domain.clone();
    image.shuffle(rng);
    domain.into_iter().zip(image).collect()
}

/// Replace each character by its image under the mapping
pub fn substitute(text: &str, mapping: &BTreeMap<char, char>) -> String {
    text.chars()
        .map(|ch| *mapping.get(&ch).unwrap_or(&ch))
        .collect()
}

/// Replace each character by its pre-image under the mapping
pub fn reverse_substitute(text: &str, mapping: &BTreeMap<char, char>) -> String {
    let inverse: BTreeMap<char, char> = mapping.iter().map(|(k, v)| (*v, *k)).collect();
    text.chars()
        .map(|ch| *inverse.get(&ch).unwrap_or(&ch))
        .collect()
}
