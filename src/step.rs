use crate::error::{Result, TextveilError};
use crate::pipeline::{base64, caesar, substitution, xor};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transformation catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Caesar,
    Xor,
    Substitution,
    Base64,
}

/// Every transformation the encoder may pick from
pub const CATALOG: [TransformKind; 4] = [
    TransformKind::Caesar,
    TransformKind::Xor,
    TransformKind::Substitution,
    TransformKind::Base64,
];

impl std::str::FromStr for TransformKind {
    type Err = TextveilError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "caesar" => Ok(Self::Caesar),
            "xor" => Ok(Self::Xor),
            "substitution" => Ok(Self::Substitution),
            "base64" => Ok(Self::Base64),
            _ => Err(TextveilError::UnknownTransform(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Caesar => "caesar",
            Self::Xor => "xor",
            Self::Substitution => "substitution",
            Self::Base64 => "base64",
        };
        f.write_str(name)
    }
}

/// One applied transformation together with the exact parameters used,
/// sufficient to invert it with no further randomness.
///
/// Serializes as `{"name": "...", "params": {...}}`, with the substitution
/// mapping stored as an object of single-character keys and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "params", rename_all = "lowercase")]
pub enum Step {
    Caesar { shift: u8 },
    Xor { key: u8 },
    Substitution { mapping: BTreeMap<char, char> },
    Base64 {},
}

impl Step {
    /// Which catalog entry this step applies
    pub fn kind(&self) -> TransformKind {
        match self {
            Step::Caesar { .. } => TransformKind::Caesar,
            Step::Xor { .. } => TransformKind::Xor,
            Step::Substitution { .. } => TransformKind::Substitution,
            Step::Base64 {} => TransformKind::Base64,
        }
    }

    /// Draw fresh random parameters for a transformation
    pub fn random<R: Rng + ?Sized>(kind: TransformKind, rng: &mut R) -> Step {
        match kind {
            TransformKind::Caesar => Step::Caesar {
                shift: rng.gen_range(1..=25),
            },
            TransformKind::Xor => Step::Xor {
                key: rng.gen_range(1..=255),
            },
            TransformKind::Substitution => Step::Substitution {
                mapping: substitution::random_mapping(rng),
            },
            TransformKind::Base64 => Step::Base64 {},
        }
    }

    /// Apply the forward transformation
    pub fn apply(&self, text: &str) -> Result<String> {
        self.validate()?;
        match self {
            Step::Caesar { shift } => Ok(caesar::shift_text(text, *shift)),
            Step::Xor { key } => xor::xor_text(text, *key),
            Step::Substitution { mapping } => Ok(substitution::substitute(text, mapping)),
            Step::Base64 {} => Ok(base64::encode_text(text)),
        }
    }

    /// Apply the inverse transformation
    pub fn invert(&self, text: &str) -> Result<String> {
        self.validate()?;
        match self {
            Step::Caesar { shift } => Ok(caesar::unshift_text(text, *shift)),
            Step::Xor { key } => xor::xor_text(text, *key),
            Step::Substitution { mapping } => Ok(substitution::reverse_substitute(text, mapping)),
            Step::Base64 {} => base64::decode_text(text),
        }
    }

    /// Check the recorded parameters against their documented domains.
    /// Guards against hand-edited or foreign metadata.
    pub fn validate(&self) -> Result<()> {
        match self {
            Step::Caesar { shift } => {
                if !(1..=25).contains(shift) {
                    return Err(TextveilError::ParamDomain(format!(
                        "caesar shift {} outside [1, 25]",
                        shift
                    )));
                }
            }
            Step::Xor { key } => {
                if *key == 0 {
                    return Err(TextveilError::ParamDomain(
                        "xor key 0 outside [1, 255]".to_string(),
                    ));
                }
            }
            Step::Substitution { mapping } => {
                if mapping.len() != substitution::DOMAIN_SIZE {
                    return Err(TextveilError::ParamDomain(format!(
                        "substitution mapping covers {} characters, expected {}",
                        mapping.len(),
                        substitution::DOMAIN_SIZE
                    )));
                }
                let printable = |ch: char| ch.is_ascii() && !ch.is_ascii_control();
                if !mapping.keys().all(|&k| printable(k)) || !mapping.values().all(|&v| printable(v))
                {
                    return Err(TextveilError::ParamDomain(
                        "substitution mapping contains non-printable characters".to_string(),
                    ));
                }
                let mut images: Vec<char> = mapping.values().copied().collect();
                images.sort_unstable();
                images.dedup();
                if images.len() != mapping.len() {
                    return Err(TextveilError::ParamDomain(
                        "substitution mapping is not a bijection".to_string(),
                    ));
                }
            }
            Step::Base64 {} => {}
        }
        Ok(())
    }
}
