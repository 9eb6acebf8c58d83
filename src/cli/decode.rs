use crate::codec;
use crate::error::Result;
use crate::metadata::Metadata;
use std::path::Path;

/// Decode an encoded message using metadata persisted by a previous encode
pub fn decode_message(encoded: &str, meta_path: &Path) -> Result<String> {
    let metadata = Metadata::read(meta_path)?;
    codec::decode(encoded, &metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::{encode_message, EncodeOptions};
    use crate::error::TextveilError;
    use tempfile::tempdir;

    #[test]
    fn test_encode_decode_through_files() {
        let dir = tempdir().unwrap();
        let meta_path = dir.path().join("meta.json");

        let message = "Round trips across process boundaries.";
        let options = EncodeOptions {
            meta_path: Some(meta_path.clone()),
        };
        let encoded = encode_message(message, &options).unwrap();

        assert_eq!(decode_message(&encoded, &meta_path).unwrap(), message);
    }

    #[test]
    fn test_missing_metadata_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            decode_message("whatever", &missing),
            Err(TextveilError::Io(_))
        ));
    }

    #[test]
    fn test_foreign_metadata_rejected() {
        let dir = tempdir().unwrap();
        let meta_path = dir.path().join("meta.json");
        std::fs::write(
            &meta_path,
            r#"{"steps": [{"name": "rot47", "params": {}}]}"#,
        )
        .unwrap();

        assert!(matches!(
            decode_message("whatever", &meta_path),
            Err(TextveilError::UnknownTransform(_))
        ));
    }
}
