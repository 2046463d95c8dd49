//! src/decryptor/read.rs
//! IV extraction — the first 16 bytes of every encrypted file

use crate::aliases::Iv16;
use crate::consts::IV_LENGTH;
use crate::error::DecryptError;
use secure_gate::RevealSecretMut;
use std::io::{ErrorKind, Read};

/// Read up to `buf.len()` bytes, stopping early only at EOF.
///
/// Returns the number of bytes read. Unlike `read_exact`, a short read is not an
/// error here; the caller decides what a partial block means.
#[inline(always)]
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read the leading IV.
///
/// # Errors
///
/// [`DecryptError::InputTooSmall`] if fewer than 16 bytes are available.
#[inline(always)]
pub fn read_iv<R: Read>(reader: &mut R) -> Result<Iv16, DecryptError> {
    let mut iv = Iv16::new([0u8; IV_LENGTH]);
    let len = read_up_to(reader, iv.expose_secret_mut())
        .map_err(|e| DecryptError::io("failed to read IV", e))?;
    if len < IV_LENGTH {
        return Err(DecryptError::InputTooSmall { len });
    }
    Ok(iv)
}
