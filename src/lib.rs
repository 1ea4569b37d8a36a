//! # reverse-lines
//!
//! Reverse the order of lines in a text stream.
//!
//! Lines are read from standard input or a file, held in memory, and written
//! last-to-first to standard output or a second file. Content is treated as
//! raw bytes: every line is written exactly as it was read, terminator
//! included, and a final line without a newline stays that way.
//!
//! ## Example
//!
//! ```
//! use reverse_lines::io::{ReadFaultPolicy, read_lines, write_reversed};
//!
//! let store = read_lines(&b"a\nb\nc\n"[..], ReadFaultPolicy::Fail).unwrap();
//! let mut out = Vec::new();
//! write_reversed(store, &mut out, "stdout").unwrap();
//! assert_eq!(out, b"c\nb\na\n");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, FatalError, IoError, Result, UsageError};

pub use core::{Line, LineStore};

pub use io::{
    Endpoint, LineReader, ReadFaultPolicy, StreamEndpoints, WriteSummary, read_lines,
    write_reversed,
};

pub use cli::{Cli, execute};
