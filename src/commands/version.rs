/// `--version`: print the version string.
use std::io::Write;

use crate::cli::usage::VERSION;
use crate::errors::CipherError;

/// Write the version string to `out`.
///
/// # Errors
///
/// Returns `CipherError::Io` if stdout cannot be written.
pub fn run<W: Write>(out: &mut W) -> Result<(), CipherError> {
    writeln!(out, "{VERSION}").map_err(CipherError::io("writing version"))
}
