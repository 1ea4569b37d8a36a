//! Command execution.
//!
//! Runs one reversal: resolve endpoints, read everything, write it back
//! reversed. Standard streams are passed in so the whole run can be driven
//! from tests.

use crate::cli::parser::Cli;
use crate::error::Result;
use crate::io::{StreamEndpoints, WriteSummary, read_lines, write_reversed};
use std::io::{BufRead, Write};

/// Runs the reversal described by `cli`.
///
/// Both endpoints are opened up front, input first. The input is fully read
/// and closed before writing begins; a file output is flushed and closed
/// before this returns.
///
/// # Errors
///
/// Returns the first usage, open, read, write, or allocation error.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use reverse_lines::cli::{Cli, execute};
///
/// let cli = Cli::parse_from(["reverse"]);
/// let mut out = Vec::new();
/// execute(&cli, &b"a\nb\nc\n"[..], &mut out).unwrap();
/// assert_eq!(out, b"c\nb\na\n");
/// ```
pub fn execute<R: BufRead, W: Write>(cli: &Cli, stdin: R, stdout: W) -> Result<WriteSummary> {
    let endpoints = StreamEndpoints::resolve(&cli.paths)?;
    tracing::debug!(
        input = %endpoints.input.display_name(),
        output = %endpoints.output.display_name(),
        "arguments resolved"
    );

    let source = endpoints.input.open_source(stdin)?;
    let mut sink = endpoints.output.open_sink(stdout)?;

    let store = read_lines(source, cli.read_fault_policy())?;
    tracing::debug!(
        lines = store.len(),
        bytes = store.total_bytes(),
        "input read"
    );

    let summary = write_reversed(store, &mut sink, &endpoints.output.display_name())?;
    drop(sink);
    tracing::debug!(lines = summary.lines, bytes = summary.bytes, "output written");

    Ok(summary)
}
