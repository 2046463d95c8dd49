//! tests/common.rs
//! Shared fixtures: a test-only AES-256-CBC encryptor and on-disk file sets

#![allow(dead_code)] // each test binary uses a different subset

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use aescbc_rs::utils::xor_blocks;
use std::fs;
use std::path::{Path, PathBuf};

/// Key used by fixtures that don't care about the key value.
pub const TEST_KEY: [u8; 32] = [0x42; 32];

/// Common plaintext used across test files.
pub const TEST_DATA: &[u8] = b"id,name\n1,alpha\n2,beta\n3,gamma\n";

/// Plaintext sizes around the block boundaries.
pub const TEST_SIZES: &[usize] = &[0, 1, 15, 16, 17, 31, 32, 33, 1000, 64 * 1024 + 3];

/// CBC-encrypt whole blocks without padding. `plaintext.len()` must be a multiple of 16.
pub fn cbc_encrypt_blocks(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    assert_eq!(plaintext.len() % 16, 0, "unpadded input must be block aligned");
    let cipher = Aes256Enc::new(key.into());
    let mut prev_block = *iv;
    let mut out = Vec::with_capacity(plaintext.len());

    for chunk in plaintext.chunks_exact(16) {
        let mut xored = [0u8; 16];
        xor_blocks(chunk, &prev_block, &mut xored);
        let mut aes_block = AesBlock::from(xored);
        cipher.encrypt_block(&mut aes_block);
        prev_block.copy_from_slice(aes_block.as_slice());
        out.extend_from_slice(&prev_block);
    }
    out
}

/// PKCS#7-pad and CBC-encrypt, returning ciphertext only (no IV).
pub fn encrypt_with_iv(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let pad = 16 - plaintext.len() % 16;
    let mut padded = plaintext.to_vec();
    padded.extend(std::iter::repeat(pad as u8).take(pad));
    cbc_encrypt_blocks(key, iv, &padded)
}

/// `IV || ciphertext` with a fresh random IV, i.e. the on-disk format.
pub fn encrypt_blob(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    let iv: [u8; 16] = rand::random();
    let mut blob = iv.to_vec();
    blob.extend(encrypt_with_iv(key, &iv, plaintext));
    blob
}

/// Deterministic pseudo-random plaintext.
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

/// Write `<dir>/<name>.aes` and, if given, `<dir>/<name>.aes.key`. Returns the `.aes` path.
pub fn write_fixture(dir: &Path, name: &str, blob: &[u8], key: Option<&[u8]>) -> PathBuf {
    let encrypted = dir.join(format!("{name}.aes"));
    fs::write(&encrypted, blob).unwrap();
    if let Some(key) = key {
        fs::write(dir.join(format!("{name}.aes.key")), key).unwrap();
    }
    encrypted
}

/// Sorted file names in `dir`.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
