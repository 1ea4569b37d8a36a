//! Error types for line reversal.
//!
//! Every variant's `Display` output is the exact one-line diagnostic the
//! `reverse` binary prints to stderr before exiting with status 1.

use std::collections::TryReserveError;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use thiserror::Error;

/// Result type alias for reversal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for a reversal run.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad invocation shape.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// An endpoint could not be opened, read, or written.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Unrecoverable resource exhaustion.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

/// Invocation errors detected while resolving arguments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    /// Three or more positional arguments.
    #[error("usage: reverse <input> <output>")]
    TooManyArguments,

    /// An option the command line does not define.
    #[error("usage: reverse <input> <output>")]
    UnrecognizedOption,

    /// Input and output arguments are the same string.
    #[error("Input and output file must differ")]
    ArgumentMismatch,
}

/// Endpoint errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// A named file could not be opened.
    #[error("error: cannot open file '{}'", path.display())]
    CannotOpen {
        /// The literal argument.
        path: OsString,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the input failed for a reason other than end-of-input.
    #[error("error: cannot read input: {source}")]
    ReadFault {
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the output failed.
    #[error("error: cannot write to '{target}': {source}")]
    WriteFault {
        /// Output name (`stdout` or the literal argument string).
        target: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors the process cannot continue past.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalError {
    /// Growing the line store or allocating a line failed.
    #[error("malloc failed")]
    OutOfMemory,
}

impl From<TryReserveError> for FatalError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Self::Fatal(err.into())
    }
}

impl Error {
    /// Returns true if this is a broken pipe on the output side.
    ///
    /// The binary treats this as a quiet early exit rather than a failure.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Io(IoError::WriteFault { source, .. })
                if source.kind() == std::io::ErrorKind::BrokenPipe
        )
    }

    /// Writes the one-line diagnostic for this error to `out`.
    ///
    /// Same text as `Display`, except that on unix a file name that is not
    /// valid UTF-8 is written as its raw bytes instead of lossily.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            Self::Io(IoError::CannotOpen { path, .. }) => write_cannot_open(out, path),
            _ => writeln!(out, "{self}"),
        }
    }
}

#[cfg(unix)]
fn write_cannot_open<W: Write>(out: &mut W, path: &OsStr) -> std::io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(b"error: cannot open file '")?;
    out.write_all(path.as_bytes())?;
    out.write_all(b"'\n")
}

#[cfg(not(unix))]
fn write_cannot_open<W: Write>(out: &mut W, path: &OsStr) -> std::io::Result<()> {
    writeln!(out, "error: cannot open file '{}'", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_usage_error_display() {
        assert_eq!(
            UsageError::TooManyArguments.to_string(),
            "usage: reverse <input> <output>"
        );
        assert_eq!(
            UsageError::ArgumentMismatch.to_string(),
            "Input and output file must differ"
        );
    }

    #[test]
    fn test_fatal_error_display() {
        assert_eq!(FatalError::OutOfMemory.to_string(), "malloc failed");
    }

    #[test]
    fn test_io_error_display() {
        let err = IoError::CannotOpen {
            path: "missing.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "error: cannot open file 'missing.txt'");

        let err = IoError::ReadFault {
            source: io::Error::other("device gone"),
        };
        assert_eq!(err.to_string(), "error: cannot read input: device gone");

        let err = IoError::WriteFault {
            target: "out.txt".to_string(),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "error: cannot write to 'out.txt': disk full");
    }

    #[test]
    fn test_top_level_is_transparent() {
        let err: Error = UsageError::ArgumentMismatch.into();
        assert_eq!(err.to_string(), "Input and output file must differ");

        let err: Error = FatalError::OutOfMemory.into();
        assert_eq!(err.to_string(), "malloc failed");
    }

    #[test]
    fn test_from_try_reserve_error() {
        let mut v: Vec<u8> = Vec::new();
        let reserve_err = v.try_reserve(usize::MAX).unwrap_err();
        let err: Error = reserve_err.into();
        assert!(matches!(err, Error::Fatal(FatalError::OutOfMemory)));
    }

    #[test]
    fn test_is_broken_pipe() {
        let err: Error = IoError::WriteFault {
            target: "stdout".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe"),
        }
        .into();
        assert!(err.is_broken_pipe());

        let err: Error = IoError::WriteFault {
            target: "stdout".to_string(),
            source: io::Error::other("disk full"),
        }
        .into();
        assert!(!err.is_broken_pipe());

        let err: Error = UsageError::TooManyArguments.into();
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_write_diagnostic_matches_display() {
        let err: Error = UsageError::TooManyArguments.into();
        let mut out = Vec::new();
        err.write_diagnostic(&mut out).unwrap();
        assert_eq!(out, b"usage: reverse <input> <output>\n");

        let err: Error = IoError::CannotOpen {
            path: "in.txt".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        }
        .into();
        let mut out = Vec::new();
        err.write_diagnostic(&mut out).unwrap();
        assert_eq!(out, b"error: cannot open file 'in.txt'\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_diagnostic_keeps_raw_path_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let err: Error = IoError::CannotOpen {
            path: OsStr::from_bytes(b"bad\xffname").to_os_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        }
        .into();
        let mut out = Vec::new();
        err.write_diagnostic(&mut out).unwrap();
        assert_eq!(out, b"error: cannot open file 'bad\xffname'\n");
    }
}
