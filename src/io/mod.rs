//! I/O for line reversal.
//!
//! Endpoint resolution and opening, line reading, and reverse-order writing.

pub mod endpoint;
pub mod reader;
pub mod writer;

pub use endpoint::{Endpoint, STDOUT_NAME, Sink, Source, StreamEndpoints};
pub use reader::{LineReader, ReadFaultPolicy, read_lines};
pub use writer::{WriteSummary, write_reversed};
