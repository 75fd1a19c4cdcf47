//! Command implementations.

use tracing::error;

use binsig::{Outcome, reference_digest, self_digest, verify};

use crate::cli::{Cli, EXIT_ERROR, EXIT_MISMATCH, EXIT_SUCCESS};

/// Dispatch to emit or verify mode.
pub fn run_command(cli: &Cli) -> i32 {
    if cli.output_hash {
        cmd_emit()
    } else {
        cmd_verify()
    }
}

/// Emit mode: print the computed digest, skip the comparison entirely.
fn cmd_emit() -> i32 {
    match self_digest() {
        Ok(digest) => {
            println!("{}", to_hex(&digest));
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "self-digest failed");
            EXIT_ERROR
        }
    }
}

/// Verify mode: compare against the embedded reference digest.
fn cmd_verify() -> i32 {
    let computed = match self_digest() {
        Ok(digest) => digest,
        Err(e) => {
            error!(error = %e, "self-digest failed");
            return EXIT_ERROR;
        }
    };

    match verify(&computed, &reference_digest()) {
        Outcome::Match => {
            println!("Hash match: binary integrity verified.");
            EXIT_SUCCESS
        }
        Outcome::Mismatch => {
            println!("Hash mismatch: binary may have been tampered with!");
            EXIT_MISMATCH
        }
    }
}

/// Lowercase hex, two characters per byte.
fn to_hex(digest: &[u8]) -> String {
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
