/// Errors from argument parsing and stream handling.
use thiserror::Error;

/// Malformed command line. Detected entirely by the option parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// `-i` or `-o` was the last token, so there is no filename to consume.
    #[error("missing filename for {flag}")]
    MissingFilename {
        /// The flag that was left without a value.
        flag: &'static str,
    },

    /// A token that is not one of the recognised flags.
    #[error("unknown argument '{token}'{}", suggestion_hint(.suggestion.as_deref()))]
    UnknownArgument {
        /// The offending token, verbatim.
        token: String,
        /// Closest known flag, when one looks like a plausible typo fix.
        suggestion: Option<String>,
    },
}

fn suggestion_hint(suggestion: Option<&str>) -> String {
    suggestion
        .map(|flag| format!(" (did you mean '{flag}'?)"))
        .unwrap_or_default()
}

/// Top-level error for one invocation.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Reading stdin or writing stdout/stderr failed.
    #[error("{context}: {source}")]
    Io {
        /// Which stream operation failed.
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl CipherError {
    /// Wrap an I/O error with a short description of the failing operation.
    #[must_use]
    pub fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Io { .. } => 1,
        }
    }
}
