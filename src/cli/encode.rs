use crate::codec;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Where to write the pipeline metadata, if anywhere
    pub meta_path: Option<PathBuf>,
}

/// Encode a message with a freshly seeded pipeline.
/// Writes metadata to `meta_path` when one is given and returns the encoded text.
pub fn encode_message(message: &str, options: &EncodeOptions) -> Result<String> {
    // One generator per invocation; no process-global RNG state
    let mut rng = StdRng::from_entropy();
    let (encoded, metadata) = codec::encode(message, &mut rng)?;

    if let Some(path) = &options.meta_path {
        metadata.write(path)?;
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_writes_metadata() {
        let dir = tempdir().unwrap();
        let meta_path = dir.path().join("meta.json");

        let options = EncodeOptions {
            meta_path: Some(meta_path.clone()),
        };
        let encoded = encode_message("Hello, World!", &options).unwrap();

        assert!(!encoded.is_empty());
        let written = std::fs::read_to_string(&meta_path).unwrap();
        assert!(written.contains("steps"));
    }

    #[test]
    fn test_encode_without_metadata_path() {
        let encoded = encode_message("no file side effects", &EncodeOptions::default()).unwrap();
        assert!(!encoded.is_empty());
    }
}
