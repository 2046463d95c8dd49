// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(key_path, encrypted_path, output_path)?` for full file handling.
//! Helpers: `decrypt_bytes`, `decrypt_file`, `decrypt_stream` and the raw
//! `decrypt_ciphertext_stream` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_bytes, decrypt_file, decrypt_stream, DecryptSummary};
pub use read::read_iv;
pub use stream::decrypt_ciphertext_stream;
