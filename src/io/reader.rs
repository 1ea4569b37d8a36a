//! Line reading.
//!
//! Splits an input stream into newline-terminated records and collects them
//! into a [`LineStore`]. Records have no length limit: each one is gathered in
//! a reusable scratch buffer and then copied into exactly-sized storage.

use crate::core::{Line, LineStore, NEWLINE};
use crate::error::{IoError, Result};
use std::io::BufRead;

/// What to do when the input fails with something other than end-of-input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFaultPolicy {
    /// Fail the run with [`IoError::ReadFault`].
    #[default]
    Fail,
    /// Treat the fault as end-of-input and keep what was read so far.
    StopReading,
}

/// Pulls records from a buffered input one at a time.
///
/// # Examples
///
/// ```
/// use reverse_lines::io::LineReader;
///
/// let mut reader = LineReader::new(&b"one\ntwo"[..]);
/// assert_eq!(reader.next_line().unwrap().unwrap().as_bytes(), b"one\n");
/// assert_eq!(reader.next_line().unwrap().unwrap().as_bytes(), b"two");
/// assert!(reader.next_line().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    scratch: Vec<u8>,
    policy: ReadFaultPolicy,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a reader that fails on read faults.
    pub const fn new(inner: R) -> Self {
        Self::with_policy(inner, ReadFaultPolicy::Fail)
    }

    /// Creates a reader with an explicit read-fault policy.
    pub const fn with_policy(inner: R, policy: ReadFaultPolicy) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
            policy,
            finished: false,
        }
    }

    /// Returns the next record, or `None` at end-of-input.
    ///
    /// `Interrupted` reads are retried by the underlying `read_until`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ReadFault`] on a read failure under
    /// [`ReadFaultPolicy::Fail`], or `OutOfMemory` if the record cannot be
    /// stored.
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        if self.finished {
            return Ok(None);
        }

        self.scratch.clear();
        match self.inner.read_until(NEWLINE, &mut self.scratch) {
            Ok(0) => {
                self.finished = true;
                Ok(None)
            }
            Ok(_) => Ok(Some(Line::copy_from(&self.scratch)?)),
            Err(source) => {
                self.finished = true;
                match self.policy {
                    ReadFaultPolicy::Fail => Err(IoError::ReadFault { source }.into()),
                    ReadFaultPolicy::StopReading => {
                        tracing::debug!(error = %source, "read fault treated as end of input");
                        Ok(None)
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Reads every record from `input` into a new store.
///
/// `input` is consumed and dropped before returning, so a file source is
/// closed by the time the caller starts writing.
///
/// # Errors
///
/// Propagates read faults (per `policy`) and allocation failures.
///
/// # Examples
///
/// ```
/// use reverse_lines::io::{ReadFaultPolicy, read_lines};
///
/// let store = read_lines(&b"a\nb\nc"[..], ReadFaultPolicy::Fail).unwrap();
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.total_bytes(), 5);
/// ```
pub fn read_lines<R: BufRead>(input: R, policy: ReadFaultPolicy) -> Result<LineStore> {
    let mut store = LineStore::new()?;
    for line in LineReader::with_policy(input, policy) {
        store.push(line?)?;
    }
    Ok(store)
}
