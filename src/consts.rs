//! # Constants
//!
//! Sizes of the AES-256-CBC primitives and the file naming convention used to
//! pair an encrypted file with its key and its output.

/// AES block size in bytes. Ciphertext length must be a multiple of this.
pub const AES_BLOCK_SIZE: usize = 16;

/// Length of the IV stored at the start of every encrypted file.
pub const IV_LENGTH: usize = 16;

/// AES-256 key length. The key file must contain exactly this many bytes.
pub const AES256_KEY_LENGTH: usize = 32;

/// Extension an encrypted file must carry. Stripped to form the output path.
pub const ENCRYPTED_EXTENSION: &str = ".aes";

/// Suffix appended to the full encrypted path to locate the key file.
pub const KEY_SUFFIX: &str = ".key";

/// Prefix of the temporary plaintext file created next to the output.
pub const TEMP_PREFIX: &str = ".aescbc-";

/// Suffix of the temporary plaintext file created next to the output.
pub const TEMP_SUFFIX: &str = ".tmp";
