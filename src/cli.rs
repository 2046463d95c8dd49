//! # Command Line
//!
//! `aescbc-decrypt <FILE.aes>` reads `<FILE.aes>.key`, decrypts into `<FILE>` and exits
//! with `0` on success or `1` on any failure, usage errors included.

use crate::decryptor::{decrypt, DecryptSummary};
use crate::error::{DecryptError, FileKind};
use crate::paths::{key_path_for, DecryptPaths};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aescbc-decrypt",
    version,
    about = "Decrypt an AES-256-CBC file (IV || ciphertext) using the raw key in <FILE>.key",
    disable_help_subcommand = true
)]
pub struct Args {
    /// Encrypted file; must end in `.aes`. The key is read from `<FILE>.key`.
    #[arg(value_name = "FILE")]
    pub encrypted: PathBuf,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log each decryption stage.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Default log level, used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Parse a full argv (program name first).
///
/// `--help` and `--version` print and exit the process with status `0`.
/// Anything else clap rejects becomes [`DecryptError::Usage`].
pub fn parse_args<I, T>(argv: I) -> Result<Args, DecryptError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => Err(DecryptError::Usage(err.render().to_string())),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second call (tests driving `main_with_args` twice) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Check inputs in the same order the tool always has (key, encrypted file,
/// extension) and then decrypt.
pub fn run(args: &Args) -> Result<DecryptSummary, DecryptError> {
    let key_path = key_path_for(&args.encrypted);
    if !key_path.is_file() {
        return Err(DecryptError::MissingFile {
            kind: FileKind::Key,
            path: key_path,
        });
    }
    if !args.encrypted.is_file() {
        return Err(DecryptError::MissingFile {
            kind: FileKind::Encrypted,
            path: args.encrypted.clone(),
        });
    }

    let paths = DecryptPaths::from_encrypted(&args.encrypted)?;
    tracing::debug!(
        encrypted = %paths.encrypted.display(),
        key = %paths.key.display(),
        output = %paths.output.display(),
        "resolved paths"
    );

    decrypt(&paths.key, &paths.encrypted, &paths.output)
}

/// Full binary behaviour: parse, log, run, map to an exit code.
pub fn main_with_args<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(err) => return report(&err),
    };
    init_logging(args.log_level());

    match run(&args) {
        Ok(summary) => {
            tracing::info!(
                output = %summary.output.display(),
                bytes = summary.plaintext_len,
                "Decryption successful"
            );
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}

fn report(err: &DecryptError) -> ExitCode {
    match err {
        // clap already rendered "error: ..." plus usage
        DecryptError::Usage(msg) => eprint!("{msg}"),
        other => eprintln!("Error: {other}"),
    }
    ExitCode::FAILURE
}
