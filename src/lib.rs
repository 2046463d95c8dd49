// src/lib.rs

pub mod aliases;
pub mod cli;
pub mod consts;
pub mod decryptor;
pub mod error;
pub mod key;
pub mod paths;
pub mod utils;

// High-level API
pub use decryptor::{decrypt, decrypt_bytes, decrypt_file, decrypt_stream, DecryptSummary};
pub use error::{DecryptError, FileKind};

pub use key::{key_from_bytes, load_key};
pub use paths::DecryptPaths;
