pub mod base64;
pub mod caesar;
pub mod substitution;
pub mod xor;
