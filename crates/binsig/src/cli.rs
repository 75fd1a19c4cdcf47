//! CLI definitions and exit codes.

use std::ffi::OsString;

use clap::Parser;

/// Exit code for a verified match (or a successfully emitted digest).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a digest mismatch.
pub const EXIT_MISMATCH: i32 = 1;
/// Exit code for open/stat/map or parse failures.
pub const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "binsig")]
#[command(about = "Verify this binary's SHA-512 digest against its embedded signature")]
#[command(version)]
pub struct Cli {
    /// Print the computed digest as hex instead of verifying it
    #[arg(long)]
    pub output_hash: bool,

    /// Anything else on the command line is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub ignored: Vec<OsString>,
}
