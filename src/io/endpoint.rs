//! Input and output endpoints.
//!
//! An endpoint is either a process standard stream or a named file. The
//! resolver turns positional arguments into a pair of endpoints; opening them
//! yields a [`Source`] and a [`Sink`] that the reader and writer use without
//! caring which kind they got.

use crate::error::{IoError, Result, UsageError};
use std::ffi::{OsStr, OsString};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};

/// Name reported for standard output in write diagnostics.
pub const STDOUT_NAME: &str = "stdout";

/// Where a stream comes from or goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Standard input or standard output.
    Standard,
    /// A file named by a literal command-line argument.
    File(OsString),
}

impl Endpoint {
    /// Name used in diagnostics: the literal argument, or `stdout`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Standard => STDOUT_NAME.to_string(),
            Self::File(path) => path.to_string_lossy().into_owned(),
        }
    }

    /// Opens this endpoint for reading.
    ///
    /// `stdin` is used for [`Endpoint::Standard`] and dropped otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::CannotOpen`] if the file cannot be opened.
    pub fn open_source<R: BufRead>(&self, stdin: R) -> Result<Source<R>> {
        match self {
            Self::Standard => Ok(Source::Standard(stdin)),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| cannot_open(path, source))?;
                Ok(Source::File(BufReader::new(file)))
            }
        }
    }

    /// Opens this endpoint for writing, truncating an existing file.
    ///
    /// `stdout` is used for [`Endpoint::Standard`] and dropped otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::CannotOpen`] if the file cannot be created.
    pub fn open_sink<W: Write>(&self, stdout: W) -> Result<Sink<W>> {
        match self {
            Self::Standard => Ok(Sink::Standard(BufWriter::new(stdout))),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|source| cannot_open(path, source))?;
                Ok(Sink::File(BufWriter::new(file)))
            }
        }
    }
}

fn cannot_open(path: &OsStr, source: io::Error) -> IoError {
    IoError::CannotOpen {
        path: path.to_os_string(),
        source,
    }
}

/// Resolved input and output endpoints.
///
/// When both are files their argument strings are guaranteed to differ.
/// The comparison is on the raw strings: `out.txt` and `./out.txt` count
/// as different even though they name the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEndpoints {
    /// Where lines are read from.
    pub input: Endpoint,
    /// Where reversed lines are written.
    pub output: Endpoint,
}

impl StreamEndpoints {
    /// Resolves positional arguments (program name excluded).
    ///
    /// | args | input | output |
    /// |------|-------|--------|
    /// | none | stdin | stdout |
    /// | `a` | file `a` | stdout |
    /// | `a b` | file `a` | file `b` |
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ArgumentMismatch`] for two identical arguments
    /// and [`UsageError::TooManyArguments`] for three or more.
    ///
    /// # Examples
    ///
    /// ```
    /// use reverse_lines::io::{Endpoint, StreamEndpoints};
    /// use std::ffi::OsString;
    ///
    /// let endpoints = StreamEndpoints::resolve(&[OsString::from("in.txt")]).unwrap();
    /// assert_eq!(endpoints.input, Endpoint::File("in.txt".into()));
    /// assert_eq!(endpoints.output, Endpoint::Standard);
    /// ```
    pub fn resolve(args: &[OsString]) -> Result<Self> {
        match args {
            [] => Ok(Self {
                input: Endpoint::Standard,
                output: Endpoint::Standard,
            }),
            [input] => Ok(Self {
                input: Endpoint::File(input.clone()),
                output: Endpoint::Standard,
            }),
            [input, output] if input == output => Err(UsageError::ArgumentMismatch.into()),
            [input, output] => Ok(Self {
                input: Endpoint::File(input.clone()),
                output: Endpoint::File(output.clone()),
            }),
            _ => Err(UsageError::TooManyArguments.into()),
        }
    }
}

/// An opened input endpoint.
#[derive(Debug)]
pub enum Source<R> {
    /// Standard input.
    Standard(R),
    /// An opened file.
    File(BufReader<File>),
}

impl<R: Read> Read for Source<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Standard(r) => r.read(buf),
            Self::File(r) => r.read(buf),
        }
    }
}

impl<R: BufRead> BufRead for Source<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Standard(r) => r.fill_buf(),
            Self::File(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Standard(r) => r.consume(amt),
            Self::File(r) => r.consume(amt),
        }
    }
}

/// An opened output endpoint. Both variants are buffered.
#[derive(Debug)]
pub enum Sink<W: Write> {
    /// Standard output.
    Standard(BufWriter<W>),
    /// An opened file.
    File(BufWriter<File>),
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Standard(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Standard(w) => w.write_all(buf),
            Self::File(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Standard(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
