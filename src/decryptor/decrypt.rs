//! src/decryptor/decrypt.rs
//! IV-prefixed AES-256-CBC decryption — file, buffer and stream entry points

use crate::aliases::Aes256Key32;
use crate::consts::{TEMP_PREFIX, TEMP_SUFFIX};
use crate::decryptor::read::read_iv;
use crate::decryptor::stream::decrypt_ciphertext_stream;
use crate::error::{DecryptError, FileKind};
use crate::key::load_key;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// What a successful [`decrypt`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptSummary {
    pub output: PathBuf,
    pub encrypted_len: u64,
    pub plaintext_len: u64,
}

/// Decrypt `IV || ciphertext` from `input_reader` into `output_writer`.
///
/// Returns the number of plaintext bytes written.
#[inline(always)]
pub fn decrypt_stream<R, W>(
    mut input_reader: R,
    output_writer: W,
    key: &Aes256Key32,
) -> Result<u64, DecryptError>
where
    R: Read,
    W: Write,
{
    let iv = read_iv(&mut input_reader)?;
    decrypt_ciphertext_stream(input_reader, output_writer, &iv, key)
}

/// Decrypt an in-memory encrypted blob.
pub fn decrypt_bytes(key: &Aes256Key32, encrypted: &[u8]) -> Result<Vec<u8>, DecryptError> {
    let mut plaintext = Vec::with_capacity(encrypted.len());
    decrypt_stream(encrypted, &mut plaintext, key)?;
    Ok(plaintext)
}

/// Decrypt an encrypted file into memory.
///
/// Cipher errors are prefixed with the file name.
pub fn decrypt_file(path: &Path, key: &Aes256Key32) -> Result<Vec<u8>, DecryptError> {
    let file = open_encrypted(path)?;
    let mut plaintext = Vec::new();
    decrypt_stream(BufReader::new(file), &mut plaintext, key)
        .map_err(|e| name_file(e, path))?;
    Ok(plaintext)
}

/// Decrypt `encrypted_path` with the raw key in `key_path` and write the plaintext to
/// `output_path`, overwriting it if present.
///
/// Plaintext is streamed into a temporary file next to `output_path` and renamed into
/// place only once the final block has been verified. On failure the temporary file is
/// removed and an existing `output_path` is left untouched.
///
/// An overwritten output keeps its permissions. A newly created output is
/// owner-only (mode `0600` on unix), like the temporary file it came from.
pub fn decrypt(
    key_path: &Path,
    encrypted_path: &Path,
    output_path: &Path,
) -> Result<DecryptSummary, DecryptError> {
    let key = load_key(key_path)?;

    let encrypted = open_encrypted(encrypted_path)?;
    let encrypted_len = encrypted
        .metadata()
        .map_err(|e| {
            DecryptError::io(format!("failed to stat {}", encrypted_path.display()), e)
        })?
        .len();
    tracing::debug!(path = %encrypted_path.display(), encrypted_len, "opened encrypted file");

    let output_dir = match output_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(output_dir)
        .map_err(|e| {
            DecryptError::io(
                format!("failed to create temporary file in {}", output_dir.display()),
                e,
            )
        })?;
    tracing::debug!(temp = %temp.path().display(), "writing plaintext to temporary file");

    let plaintext_len = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let written = decrypt_stream(BufReader::new(encrypted), &mut writer, &key)
            .map_err(|e| name_file(e, encrypted_path))?;
        writer
            .flush()
            .map_err(|e| DecryptError::io("failed to flush plaintext", e))?;
        written
    };

    if let Ok(existing) = fs::metadata(output_path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| {
                DecryptError::io(
                    format!("failed to copy permissions of {}", output_path.display()),
                    e,
                )
            })?;
    }

    temp.persist(output_path).map_err(|e| {
        DecryptError::io(
            format!("failed to write output file {}", output_path.display()),
            e.error,
        )
    })?;

    Ok(DecryptSummary {
        output: output_path.to_path_buf(),
        encrypted_len,
        plaintext_len,
    })
}

fn open_encrypted(path: &Path) -> Result<File, DecryptError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecryptError::MissingFile {
            kind: FileKind::Encrypted,
            path: path.to_path_buf(),
        },
        _ => DecryptError::io(format!("failed to open {}", path.display()), e),
    })
}

fn name_file(err: DecryptError, path: &Path) -> DecryptError {
    match err {
        DecryptError::Cipher(msg) => {
            DecryptError::Cipher(format!("could not decrypt file {}: {msg}", path.display()))
        }
        other => other,
    }
}
