//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers backed by [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every buffer that ever holds key material, the IV or a decrypted block lives in one
//! of these types so it is wiped on drop and can only be read through `.expose_secret()`.
//!
//! - [`Aes256Key32`] - 32-byte AES-256 key, read verbatim from the key file
//! - [`Iv16`] - 16-byte initialization vector taken from the head of the encrypted file
//! - [`Block16`] - one 16-byte AES block (ciphertext chaining value or plaintext)

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

// Semantic sub-types, alphabetical order
pub type Aes256Key32 = SpanBuffer<32>; // raw cipher key, no derivation
pub type Block16 = SpanBuffer<16>; // one AES block
pub type Iv16 = SpanBuffer<16>; // leading IV of the encrypted file
