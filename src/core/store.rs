//! Ordered in-memory collection of lines.

use crate::core::Line;
use crate::error::FatalError;

/// Number of line slots reserved before the first record arrives.
pub const INITIAL_CAPACITY: usize = 1024;

/// Lines in read order.
///
/// Capacity doubles whenever the store is full. Growth goes through
/// `try_reserve_exact`, so an allocation failure comes back as
/// [`FatalError::OutOfMemory`] instead of aborting the process.
///
/// # Examples
///
/// ```
/// use reverse_lines::core::{Line, LineStore};
///
/// let mut store = LineStore::new().unwrap();
/// store.push(Line::copy_from(b"first\n").unwrap()).unwrap();
/// store.push(Line::copy_from(b"second\n").unwrap()).unwrap();
///
/// let last = store.pop_last().unwrap();
/// assert_eq!(last.as_bytes(), b"second\n");
/// ```
#[derive(Debug, Default)]
pub struct LineStore {
    lines: Vec<Line>,
    total_bytes: usize,
}

impl LineStore {
    /// Creates a store with [`INITIAL_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns [`FatalError::OutOfMemory`] if the initial allocation fails.
    pub fn new() -> Result<Self, FatalError> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a store with room for `capacity` lines.
    ///
    /// # Errors
    ///
    /// Returns [`FatalError::OutOfMemory`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, FatalError> {
        let mut lines = Vec::new();
        lines.try_reserve_exact(capacity)?;
        Ok(Self {
            lines,
            total_bytes: 0,
        })
    }

    /// Appends a line, doubling capacity first if the store is full.
    ///
    /// # Errors
    ///
    /// Returns [`FatalError::OutOfMemory`] if growing the store fails.
    pub fn push(&mut self, line: Line) -> Result<(), FatalError> {
        if self.lines.len() == self.lines.capacity() {
            let additional = self.lines.capacity().max(1);
            self.lines.try_reserve_exact(additional)?;
        }
        self.total_bytes += line.len();
        self.lines.push(line);
        Ok(())
    }

    /// Removes and returns the most recently read line.
    pub fn pop_last(&mut self) -> Option<Line> {
        let line = self.lines.pop()?;
        self.total_bytes -= line.len();
        Some(line)
    }

    /// Number of lines held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of the byte lengths of all held lines.
    #[must_use]
    pub const fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Returns the line at `index` in read order.
    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Slot capacity currently reserved.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.lines.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> Line {
        Line::copy_from(s.as_bytes()).unwrap()
    }

    #[test]
    fn test_new_store() {
        let store = LineStore::new().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.total_bytes(), 0);
        assert!(store.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn test_insertion_order() {
        let mut store = LineStore::new().unwrap();
        store.push(line("a\n")).unwrap();
        store.push(line("b\n")).unwrap();
        store.push(line("c")).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().as_bytes(), b"a\n");
        assert_eq!(store.get(2).unwrap().as_bytes(), b"c");
        assert_eq!(store.total_bytes(), 5);
    }

    #[test]
    fn test_pop_last_drains_from_back() {
        let mut store = LineStore::new().unwrap();
        store.push(line("one\n")).unwrap();
        store.push(line("two\n")).unwrap();

        assert_eq!(store.pop_last().unwrap().as_bytes(), b"two\n");
        assert_eq!(store.total_bytes(), 4);
        assert_eq!(store.pop_last().unwrap().as_bytes(), b"one\n");
        assert!(store.pop_last().is_none());
        assert_eq!(store.total_bytes(), 0);
    }

    #[test]
    fn test_grows_by_doubling() {
        let mut store = LineStore::with_capacity(2).unwrap();
        let initial = store.capacity();
        for _ in 0..=initial {
            store.push(line("x\n")).unwrap();
        }
        assert_eq!(store.len(), initial + 1);
        assert!(store.capacity() >= initial * 2);
    }

    #[test]
    fn test_grows_from_zero_capacity() {
        let mut store = LineStore::with_capacity(0).unwrap();
        store.push(line("x")).unwrap();
        store.push(line("y")).unwrap();
        assert_eq!(store.len(), 2);
    }
}
