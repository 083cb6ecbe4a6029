/// Diagnostics written to stderr.
use std::io::Write;

use crate::errors::CipherError;

/// Write a `[error] ...` line for a failed invocation.
pub fn write_error<W: Write>(out: &mut W, err: &CipherError) {
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(out, "[error] {err}");
}

/// Write a `[warning] ...` line.
///
/// # Errors
///
/// Returns the underlying I/O error if the write fails.
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    writeln!(out, "[warning] {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::UsageError;

    #[test]
    fn test_error_line() {
        let mut buf = Vec::new();
        let err = CipherError::from(UsageError::UnknownArgument {
            token: "-x".to_owned(),
            suggestion: None,
        });
        write_error(&mut buf, &err);
        assert_eq!(String::from_utf8(buf).unwrap(), "[error] unknown argument '-x'\n");
    }

    #[test]
    fn test_warning_line() {
        let mut buf = Vec::new();
        write_warning(&mut buf, "careful").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[warning] careful\n");
    }
}
