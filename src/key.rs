//! src/key.rs
//! Raw key loading — the key file bytes ARE the cipher key (no salt, no KDF)

use crate::aliases::Aes256Key32;
use crate::consts::AES256_KEY_LENGTH;
use crate::error::{DecryptError, FileKind};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Wrap raw key material in a secure buffer.
///
/// Anything other than exactly 32 bytes is rejected; the key is never truncated or padded.
pub fn key_from_bytes(bytes: &[u8]) -> Result<Aes256Key32, DecryptError> {
    let raw: [u8; AES256_KEY_LENGTH] = bytes.try_into().map_err(|_| {
        DecryptError::Cipher(format!(
            "invalid key length: expected {AES256_KEY_LENGTH} bytes, got {}",
            bytes.len()
        ))
    })?;
    Ok(Aes256Key32::new(raw))
}

/// Read a key file verbatim and validate its length.
pub fn load_key(path: &Path) -> Result<Aes256Key32, DecryptError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecryptError::MissingFile {
            kind: FileKind::Key,
            path: path.to_path_buf(),
        },
        _ => DecryptError::io(format!("failed to read key file {}", path.display()), e),
    })?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded key file");
    key_from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    #[test]
    fn accepts_exact_length() {
        let key = key_from_bytes(&[7u8; 32]).unwrap();
        assert_eq!(key.expose_secret(), &[7u8; 32]);
    }

    #[test]
    fn rejects_short_key() {
        let err = key_from_bytes(&[0u8; 31]).map(drop).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cipher error: invalid key length: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn rejects_long_key() {
        assert!(matches!(
            key_from_bytes(&[0u8; 33]),
            Err(DecryptError::Cipher(_))
        ));
    }

    #[test]
    fn missing_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.aes.key");
        match load_key(&path) {
            Err(DecryptError::MissingFile { kind, path: p }) => {
                assert_eq!(kind, FileKind::Key);
                assert_eq!(p, path);
            }
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(_) => panic!("key file should be missing"),
        }
    }
}
