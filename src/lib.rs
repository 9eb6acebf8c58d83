//! Textveil - reversible text obfuscation with replayable metadata
//!
//! A message is run through a randomly chosen, ordered subset of weak,
//! reversible transformations; the exact parameters of every step are
//! recorded so the chain can be replayed in reverse to recover the original.
//! None of this is cryptography - the transforms are deliberately trivial,
//! the point is exact reversibility from persisted metadata.
//!
//! ## Transform catalog
//!
//! ```text
//! Input → [Caesar | Xor | Substitution | Base64]{1..4, no repeats} → Output
//! ```
//!
//! - **Caesar**: per-case alphabet rotation, shift in [1, 25]
//! - **Xor**: code-point XOR with a key in [1, 255] (self-inverse)
//! - **Substitution**: random bijection over printable ASCII
//! - **Base64**: standard base64 of the UTF-8 bytes
//!
//! Decoding applies the recorded inverses in reverse order; the steps do not
//! commute, so order is preserved exactly in the metadata.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use textveil::codec;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let (encoded, metadata) = codec::encode("Hello, World!", &mut rng).unwrap();
//! let decoded = codec::decode(&encoded, &metadata).unwrap();
//! assert_eq!(decoded, "Hello, World!");
//! ```
//!
//! A separate one-shot codec ([`packed`]) compresses with zlib and encodes
//! URL-safe base64; it takes no parameters and needs no metadata.

pub mod cli;
pub mod codec;
pub mod error;
pub mod metadata;
pub mod packed;
pub mod pipeline;
pub mod step;

pub use error::{Result, TextveilError};
pub use metadata::Metadata;
pub use step::{Step, TransformKind, CATALOG};
