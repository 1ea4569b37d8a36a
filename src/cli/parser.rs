//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros. Options are only
//! recognised before the first file name. From there on every word,
//! dash-prefixed or not, is a file name, so the resolver sees the same
//! argument count a plain `argv` walk would and decides what counts as a
//! usage error.

use crate::error::UsageError;
use crate::io::ReadFaultPolicy;
use clap::Parser;
use std::ffi::OsString;

/// Reverse the order of lines.
///
/// Reads standard input (or INPUT) and writes its lines last-to-first to
/// standard output (or OUTPUT). INPUT and OUTPUT must differ.
#[derive(Parser, Debug)]
#[command(name = "reverse")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(override_usage = "reverse [OPTIONS] [INPUT] [OUTPUT]")]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Treat a read error as end of input and write what was read so far.
    #[arg(long)]
    pub stop_on_read_error: bool,

    /// Input file, then output file.
    #[arg(value_name = "FILE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub paths: Vec<OsString>,
}

impl Cli {
    /// Returns the read-fault policy selected on the command line.
    #[must_use]
    pub const fn read_fault_policy(&self) -> ReadFaultPolicy {
        if self.stop_on_read_error {
            ReadFaultPolicy::StopReading
        } else {
            ReadFaultPolicy::Fail
        }
    }
}

/// Maps a clap failure onto the usage diagnostic.
///
/// Only malformed leading options reach this, e.g. `--verbose=yes`.
#[must_use]
pub const fn usage_error(_err: &clap::Error) -> UsageError {
    UsageError::UnrecognizedOption
}
