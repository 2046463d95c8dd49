// src/bin/aescbc-decrypt.rs

use std::process::ExitCode;

fn main() -> ExitCode {
    aescbc_rs::cli::main_with_args(std::env::args_os())
}
