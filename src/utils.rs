// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC decryption path to undo the chaining step: the output of the
/// block cipher is XORed with the previous ciphertext block (or the IV).
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. All callers pass
/// `expose_secret()` of a 16-byte secure-gate buffer, so this is never hit.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Length of valid PKCS#7 padding at the end of `block`, or `None` if the padding is malformed.
#[inline]
pub fn pkcs7_padding_len(block: &[u8; 16]) -> Option<usize> {
    let pad = block[15];
    if pad == 0 || pad as usize > block.len() {
        return None;
    }
    let start = block.len() - pad as usize;
    // Fold over every tail byte instead of short-circuiting.
    let mismatch = block[start..].iter().fold(0u8, |acc, &b| acc | (b ^ pad));
    (mismatch == 0).then_some(pad as usize)
}
