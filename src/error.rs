//! # Error Types
//!
//! Every operation returns [`Result<T, DecryptError>`](DecryptError). The taxonomy is flat:
//! each variant maps to exit code `1` in the binary and nothing is retried.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two input files a [`DecryptError::MissingFile`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Key,
    Encrypted,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Key => f.write_str("Key"),
            FileKind::Encrypted => f.write_str("Encrypted"),
        }
    }
}

/// The error type for all decryption operations.
#[derive(Error, Debug)]
pub enum DecryptError {
    /// Wrong argument count or otherwise unparseable command line.
    ///
    /// Holds the usage message rendered by the argument parser.
    #[error("{0}")]
    Usage(String),

    /// The key file or the encrypted file does not exist.
    #[error("{kind} file not found: {}", .path.display())]
    MissingFile { kind: FileKind, path: PathBuf },

    /// The encrypted file name does not end in `.aes`.
    #[error("Encrypted file must have a .aes extension: {}", .0.display())]
    BadExtension(PathBuf),

    /// The encrypted data is shorter than the IV.
    #[error("Encrypted file is too small to contain IV ({len} bytes, need 16)")]
    InputTooSmall { len: usize },

    /// The cipher rejected the key, the ciphertext length or the padding.
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Any read, write, rename or delete failure.
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl DecryptError {
    /// Wrap an I/O error with a message naming the operation and file.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        DecryptError::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<&'static str> for DecryptError {
    fn from(msg: &'static str) -> Self {
        DecryptError::Cipher(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_names_path() {
        let err = DecryptError::MissingFile {
            kind: FileKind::Key,
            path: PathBuf::from("dir/input.aes.key"),
        };
        assert_eq!(err.to_string(), "Key file not found: dir/input.aes.key");
    }

    #[test]
    fn io_keeps_source() {
        let err = DecryptError::io(
            "failed to read input.aes",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error: failed to read input.aes: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn static_str_becomes_cipher_error() {
        let err: DecryptError = "bad padding".into();
        assert!(matches!(err, DecryptError::Cipher(ref m) if m == "bad padding"));
    }
}
