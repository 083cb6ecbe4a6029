/// Command-line token parsing.
use crate::errors::UsageError;

use super::suggest::closest_flag;

/// Options selected on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    /// `-h` / `--help` was given.
    pub help_requested: bool,
    /// `--version` was given.
    pub version_requested: bool,
    /// Path given to `-i`. Accepted but not read from.
    pub input_path: Option<String>,
    /// Path given to `-o`. Accepted but not written to.
    pub output_path: Option<String>,
}

/// Parse the tokens following the program name.
///
/// Tokens are matched exactly and scanned left to right. The token after
/// `-i`/`-o` is taken verbatim as the filename, even if it starts with `-`.
/// Repeated `-i`/`-o` keep the last value.
///
/// # Errors
///
/// Returns `UsageError::MissingFilename` when `-i`/`-o` is the last token and
/// `UsageError::UnknownArgument` for any unrecognised token. Parsing stops at
/// the first error.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<ParsedOptions, UsageError> {
    let mut options = ParsedOptions::default();
    let mut tokens = tokens.iter().map(AsRef::as_ref);

    while let Some(token) = tokens.next() {
        match token {
            "-h" | "--help" => options.help_requested = true,
            "--version" => options.version_requested = true,
            "-i" => options.input_path = Some(take_filename(&mut tokens, "-i")?),
            "-o" => options.output_path = Some(take_filename(&mut tokens, "-o")?),
            unknown => {
                return Err(UsageError::UnknownArgument {
                    token: unknown.to_owned(),
                    suggestion: closest_flag(unknown),
                });
            }
        }
    }

    Ok(options)
}

fn take_filename<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    flag: &'static str,
) -> Result<String, UsageError> {
    tokens
        .next()
        .map(str::to_owned)
        .ok_or(UsageError::MissingFilename { flag })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_args(&empty), Ok(ParsedOptions::default()));
    }

    #[test]
    fn test_help_short_and_long() {
        for flag in ["-h", "--help"] {
            let opts = parse_args(&[flag]).unwrap();
            assert!(opts.help_requested);
            assert!(!opts.version_requested);
        }
    }

    #[test]
    fn test_version() {
        let opts = parse_args(&["--version"]).unwrap();
        assert!(opts.version_requested);
        assert!(!opts.help_requested);
    }

    #[test]
    fn test_help_and_version_both_set() {
        let opts = parse_args(&["--version", "-h"]).unwrap();
        assert!(opts.help_requested);
        assert!(opts.version_requested);
    }

    #[test]
    fn test_input_and_output_paths() {
        let opts = parse_args(&["-i", "a.txt", "-o", "b.txt"]).unwrap();
        assert_eq!(opts.input_path.as_deref(), Some("a.txt"));
        assert_eq!(opts.output_path.as_deref(), Some("b.txt"));
        assert!(!opts.help_requested);
    }

    #[test]
    fn test_missing_filename() {
        assert_eq!(
            parse_args(&["-i"]),
            Err(UsageError::MissingFilename { flag: "-i" })
        );
        assert_eq!(
            parse_args(&["-i", "in.txt", "-o"]),
            Err(UsageError::MissingFilename { flag: "-o" })
        );
    }

    #[test]
    fn test_unknown_argument() {
        assert_eq!(
            parse_args(&["-x"]),
            Err(UsageError::UnknownArgument {
                token: "-x".to_owned(),
                suggestion: None,
            })
        );
    }

    #[test]
    fn test_unknown_argument_with_suggestion() {
        let err = parse_args(&["--vers"]).unwrap_err();
        assert_eq!(
            err,
            UsageError::UnknownArgument {
                token: "--vers".to_owned(),
                suggestion: Some("--version".to_owned()),
            }
        );
    }

    #[test]
    fn test_stops_at_first_error() {
        // `-o` at the end would also be an error; the unknown token wins.
        let err = parse_args(&["-h", "bogus", "-o"]).unwrap_err();
        assert!(matches!(err, UsageError::UnknownArgument { ref token, .. } if token == "bogus"));
    }

    #[test]
    fn test_filename_taken_verbatim() {
        let opts = parse_args(&["-i", "-h"]).unwrap();
        assert_eq!(opts.input_path.as_deref(), Some("-h"));
        assert!(!opts.help_requested);
    }

    #[test]
    fn test_last_write_wins() {
        let opts = parse_args(&["-i", "first", "-o", "x", "-i", "second"]).unwrap();
        assert_eq!(opts.input_path.as_deref(), Some("second"));
        assert_eq!(opts.output_path.as_deref(), Some("x"));
    }

    #[test]
    fn test_exact_match_only() {
        for token in ["-ifile", "--input=a.txt", "-hi", "--HELP", "-H"] {
            assert!(
                matches!(parse_args(&[token]), Err(UsageError::UnknownArgument { .. })),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn test_owned_tokens() {
        let tokens = vec!["-o".to_owned(), "out.txt".to_owned()];
        let opts = parse_args(&tokens).unwrap();
        assert_eq!(opts.output_path.as_deref(), Some("out.txt"));
    }
}
