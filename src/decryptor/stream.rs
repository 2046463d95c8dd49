//! src/decryptor/stream.rs
//! AES-256-CBC streaming decryption with PKCS#7 unpadding
//!
//! The last plaintext block is held back until EOF so its padding can be checked
//! and stripped before it ever reaches the writer.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use crate::decryptor::read::read_up_to;
use crate::error::DecryptError;
use secure_gate::{RevealSecret, RevealSecretMut};
use crate::utils::{pkcs7_padding_len, xor_blocks};
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};
use std::io::{Read, Write};

/// Decrypt a raw ciphertext stream (IV already removed) into `output_writer`.
///
/// Returns the number of plaintext bytes written.
///
/// # Errors
///
/// - [`DecryptError::Cipher`] if the ciphertext is empty, is not a multiple of
///   16 bytes, or ends in malformed PKCS#7 padding
/// - [`DecryptError::Io`] if reading or writing fails
#[inline(always)]
pub fn decrypt_ciphertext_stream<R, W>(
    mut input_reader: R,
    mut output_writer: W,
    initial_vector: &Iv16,
    decryption_key: &Aes256Key32,
) -> Result<u64, DecryptError>
where
    R: Read,
    W: Write,
{
    let cipher = Aes256Dec::new(decryption_key.expose_secret().into());

    let mut previous_block = Block16::new(*initial_vector.expose_secret());
    let mut ciphertext_block = Block16::new([0u8; AES_BLOCK_SIZE]);
    let mut pending: Option<Block16> = None;
    let mut ciphertext_len: u64 = 0;
    let mut written: u64 = 0;

    loop {
        let n = read_up_to(&mut input_reader, ciphertext_block.expose_secret_mut())
            .map_err(|e| DecryptError::io("failed to read ciphertext", e))?;
        ciphertext_len += n as u64;

        if n == 0 {
            break;
        }
        if n < AES_BLOCK_SIZE {
            return Err(DecryptError::Cipher(format!(
                "ciphertext length {ciphertext_len} is not a multiple of {AES_BLOCK_SIZE} bytes"
            )));
        }

        // The previous block is now known not to be the last one.
        if let Some(block) = pending.take() {
            output_writer
                .write_all(block.expose_secret())
                .map_err(|e| DecryptError::io("failed to write plaintext", e))?;
            written += AES_BLOCK_SIZE as u64;
        }

        let mut aes_block = AesBlock::from(*ciphertext_block.expose_secret());
        cipher.decrypt_block(&mut aes_block);

        let mut plaintext_block = Block16::new([0u8; AES_BLOCK_SIZE]);
        xor_blocks(
            aes_block.as_slice(),
            previous_block.expose_secret(),
            plaintext_block.expose_secret_mut(),
        );

        previous_block = Block16::new(*ciphertext_block.expose_secret());
        pending = Some(plaintext_block);
    }

    let last_block = pending.ok_or("empty ciphertext: missing final block")?;
    let padding = pkcs7_padding_len(last_block.expose_secret())
        .ok_or("bad decrypt: invalid PKCS#7 padding (wrong key or corrupted data)")?;

    let tail = &last_block.expose_secret()[..AES_BLOCK_SIZE - padding];
    output_writer
        .write_all(tail)
        .map_err(|e| DecryptError::io("failed to write plaintext", e))?;
    written += tail.len() as u64;

    tracing::debug!(ciphertext_len, plaintext_len = written, "ciphertext stream decrypted");
    Ok(written)
}
