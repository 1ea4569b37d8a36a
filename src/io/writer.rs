//! Reverse-order writing.

use crate::core::LineStore;
use crate::error::{IoError, Result};
use std::io::Write;

/// Counts reported after a successful write phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteSummary {
    /// Lines written.
    pub lines: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Drains `store` from the back, writing each line to `out` verbatim.
///
/// Every line is dropped as soon as it has been written. The output is
/// flushed before returning. `target` names the output in diagnostics.
///
/// # Errors
///
/// Returns [`IoError::WriteFault`] if a write or the final flush fails.
///
/// # Examples
///
/// ```
/// use reverse_lines::io::{ReadFaultPolicy, read_lines, write_reversed};
///
/// let store = read_lines(&b"a\nb\nc"[..], ReadFaultPolicy::Fail).unwrap();
/// let mut out = Vec::new();
/// write_reversed(store, &mut out, "stdout").unwrap();
/// assert_eq!(out, b"cb\na\n");
/// ```
pub fn write_reversed<W: Write>(
    mut store: LineStore,
    out: &mut W,
    target: &str,
) -> Result<WriteSummary> {
    let fault = |source| IoError::WriteFault {
        target: target.to_string(),
        source,
    };

    let mut summary = WriteSummary::default();
    while let Some(line) = store.pop_last() {
        out.write_all(line.as_bytes()).map_err(fault)?;
        summary.lines += 1;
        summary.bytes += line.len();
    }
    out.flush().map_err(fault)?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Line;
    use std::io;

    fn store_of(records: &[&[u8]]) -> LineStore {
        let mut store = LineStore::new().unwrap();
        for record in records {
            store.push(Line::copy_from(record).unwrap()).unwrap();
        }
        store
    }

    /// Accepts `limit` bytes and then fails.
    struct Full {
        limit: usize,
        written: usize,
    }

    impl Write for Full {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written >= self.limit {
                return Err(io::Error::other("no space left on device"));
            }
            let n = buf.len().min(self.limit - self.written);
            self.written += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reverses_terminated_lines() {
        let mut out = Vec::new();
        let store = store_of(&[b"a\n", b"b\n", b"c\n"]);
        let summary = write_reversed(store, &mut out, "stdout").unwrap();
        assert_eq!(out, b"c\nb\na\n");
        assert_eq!(summary, WriteSummary { lines: 3, bytes: 6 });
    }

    #[test]
    fn test_unterminated_last_line_is_not_fixed_up() {
        let mut out = Vec::new();
        write_reversed(store_of(&[b"a\n", b"b\n", b"c"]), &mut out, "stdout").unwrap();
        assert_eq!(out, b"cb\na\n");
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let mut out = Vec::new();
        let summary = write_reversed(LineStore::new().unwrap(), &mut out, "stdout").unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.lines, 0);
    }

    #[test]
    fn test_crlf_preserved() {
        let mut out = Vec::new();
        write_reversed(store_of(&[b"one\r\n", b"two\r\n"]), &mut out, "stdout").unwrap();
        assert_eq!(out, b"two\r\none\r\n");
    }

    #[test]
    fn test_write_fault_names_target() {
        let mut out = Full { limit: 3, written: 0 };
        let err = write_reversed(store_of(&[b"a\n", b"b\n"]), &mut out, "out.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: cannot write to 'out.txt': no space left on device"
        );
    }
}
