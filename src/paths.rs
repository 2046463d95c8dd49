//! # File Naming Convention
//!
//! An encrypted file `report.csv.aes` is paired with its key `report.csv.aes.key`
//! and decrypts to `report.csv` in the same directory.

use crate::consts::{ENCRYPTED_EXTENSION, KEY_SUFFIX};
use crate::error::DecryptError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// The three paths involved in one decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptPaths {
    pub encrypted: PathBuf,
    pub key: PathBuf,
    pub output: PathBuf,
}

impl DecryptPaths {
    /// Derive key and output paths from an encrypted file path.
    ///
    /// # Errors
    ///
    /// [`DecryptError::BadExtension`] if the file name does not end in `.aes`,
    /// or if stripping it would leave an empty file name.
    pub fn from_encrypted(encrypted: impl Into<PathBuf>) -> Result<Self, DecryptError> {
        let encrypted = encrypted.into();
        let output = strip_extension(&encrypted)
            .ok_or_else(|| DecryptError::BadExtension(encrypted.clone()))?;
        Ok(Self {
            key: key_path_for(&encrypted),
            output,
            encrypted,
        })
    }
}

/// `<encrypted>.key`: the suffix is appended to the full path, extension included.
pub fn key_path_for(encrypted: &Path) -> PathBuf {
    let mut raw: OsString = encrypted.as_os_str().to_os_string();
    raw.push(KEY_SUFFIX);
    PathBuf::from(raw)
}

// Byte-wise suffix match, so non-UTF-8 names ending in `.aes` are accepted.
fn strip_extension(encrypted: &Path) -> Option<PathBuf> {
    let file_name = encrypted.file_name()?;
    let stem_len = file_name
        .as_encoded_bytes()
        .strip_suffix(ENCRYPTED_EXTENSION.as_bytes())?
        .len();
    if stem_len == 0 {
        return None;
    }
    Some(encrypted.with_file_name(file_stem(file_name, stem_len)?))
}

#[cfg(unix)]
fn file_stem(file_name: &OsStr, len: usize) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;
    Some(OsStr::from_bytes(&file_name.as_bytes()[..len]).to_os_string())
}

// Off unix the stem is rebuilt from `str`, so the name must be valid Unicode.
#[cfg(not(unix))]
fn file_stem(file_name: &OsStr, len: usize) -> Option<OsString> {
    file_name.to_str()?.get(..len).map(OsString::from)
}
