/// Command dispatch: turns parsed options into an `Action` and runs it.
pub mod help;
pub mod transliterate;
pub mod version;

use std::io::{Read, Write};

use log::debug;

use crate::cli::ParsedOptions;
use crate::errors::CipherError;

/// What one invocation will do. Priority: help, then version, then text processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage text.
    Help,
    /// Print the version string.
    Version,
    /// Transliterate stdin to stdout.
    Transliterate {
        /// Requested input file (unsupported, stdin is used).
        input_path: Option<String>,
        /// Requested output file (unsupported, stdout is used).
        output_path: Option<String>,
    },
}

impl From<ParsedOptions> for Action {
    fn from(options: ParsedOptions) -> Self {
        if options.help_requested {
            Self::Help
        } else if options.version_requested {
            Self::Version
        } else {
            Self::Transliterate {
                input_path: options.input_path,
                output_path: options.output_path,
            }
        }
    }
}

/// The byte streams owned by the driver for one invocation.
pub struct Streams<R, W, E> {
    /// Text source.
    pub input: R,
    /// Help, version or transliterated text.
    pub output: W,
    /// Warnings and errors.
    pub diagnostics: E,
}

/// Run `action` against `streams`.
///
/// # Errors
///
/// Returns `CipherError::Io` when reading input or writing output fails.
pub fn dispatch<R: Read, W: Write, E: Write>(
    action: Action,
    streams: &mut Streams<R, W, E>,
) -> Result<(), CipherError> {
    debug!("dispatching {action:?}");
    match action {
        Action::Help => help::run(&mut streams.output),
        Action::Version => version::run(&mut streams.output),
        Action::Transliterate {
            input_path,
            output_path,
        } => transliterate::run(input_path.as_deref(), output_path.as_deref(), streams),
    }
}
