//! One-shot SHA-256 command-line tool.
//!
//! Hashes the UTF-8 bytes of a single message argument and prints the
//! input together with its 256-bit digest.

use std::process::ExitCode;

use clap::Parser;

use ledgerhash::hash::sha256_hex;

#[derive(Parser)]
#[command(name = "ledgerhash")]
#[command(about = "Compute the SHA-256 digest of a message", long_about = None)]
struct Cli {
    /// Message to hash
    message: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match sha256_hex(cli.message.as_bytes()) {
        Ok(digest) => {
            println!("Input: {}", cli.message);
            println!("SHA-256 Digest: {}", digest);

            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);

            ExitCode::FAILURE
        }
    }
}
