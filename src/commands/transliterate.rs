/// Default command: transliterate stdin to stdout.
use std::io::{Read, Write};

use log::debug;

use super::Streams;
use crate::cli::write_warning;
use crate::errors::CipherError;
use crate::transliterate::transliterate_reader;

/// Read all input, transliterate it and write the result plus a newline.
///
/// File paths are accepted but unsupported: each non-empty one produces a
/// warning and the standard stream is used instead. An empty path counts as
/// not given.
///
/// # Errors
///
/// Returns `CipherError::Io` on a read or write failure.
pub fn run<R: Read, W: Write, E: Write>(
    input_path: Option<&str>,
    output_path: Option<&str>,
    streams: &mut Streams<R, W, E>,
) -> Result<(), CipherError> {
    if let Some(path) = input_path.filter(|p| !p.is_empty()) {
        write_warning(
            &mut streams.diagnostics,
            &format!("input from file ('{path}') not implemented yet, using stdin"),
        )
        .map_err(CipherError::io("writing warning"))?;
    }

    let text = transliterate_reader(&mut streams.input).map_err(CipherError::io("reading stdin"))?;
    debug!("transliterated input into {} characters", text.len());

    if let Some(path) = output_path.filter(|p| !p.is_empty()) {
        write_warning(
            &mut streams.diagnostics,
            &format!("output to file ('{path}') not implemented yet, using stdout"),
        )
        .map_err(CipherError::io("writing warning"))?;
    }

    writeln!(streams.output, "{text}").map_err(CipherError::io("writing stdout"))?;
    streams.output.flush().map_err(CipherError::io("writing stdout"))
}
