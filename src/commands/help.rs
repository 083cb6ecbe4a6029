/// `--help`: print usage text.
use std::io::Write;

use crate::cli::usage::help_text;
use crate::errors::CipherError;

/// Write the usage text to `out`.
///
/// # Errors
///
/// Returns `CipherError::Io` if stdout cannot be written.
pub fn run<W: Write>(out: &mut W) -> Result<(), CipherError> {
    writeln!(out, "{}", help_text().trim_end()).map_err(CipherError::io("writing help"))
}
