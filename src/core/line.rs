//! A single record read from the input.

use crate::error::FatalError;

/// Record terminator.
pub const NEWLINE: u8 = b'\n';

/// An owned line of raw bytes.
///
/// Holds everything up to and including the newline, or the trailing bytes
/// before end-of-input when the source does not end with one. Content is
/// never decoded or normalised.
///
/// # Examples
///
/// ```
/// use reverse_lines::core::Line;
///
/// let line = Line::copy_from(b"hello\n").unwrap();
/// assert_eq!(line.as_bytes(), b"hello\n");
/// assert_eq!(line.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Copies a record into freshly allocated storage sized to fit it exactly.
    ///
    /// # Errors
    ///
    /// Returns [`FatalError::OutOfMemory`] if the allocation fails.
    pub fn copy_from(record: &[u8]) -> Result<Self, FatalError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(record.len())?;
        bytes.extend_from_slice(record);
        Ok(Self { bytes })
    }

    /// Returns the stored bytes, terminator included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes, terminator included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for a zero-length record.
    ///
    /// Only ever true for lines built by hand; the reader never yields one.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns true if the record ends with a newline.
    #[cfg(test)]
    pub(crate) fn is_terminated(&self) -> bool {
        self.bytes.last() == Some(&NEWLINE)
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
