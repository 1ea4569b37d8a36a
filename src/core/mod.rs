//! Core domain models.
//!
//! Lines and the ordered store that holds them between the read and write
//! phases. These are pure data structures with no I/O dependencies.

pub mod line;
pub mod store;

pub use line::{Line, NEWLINE};
pub use store::{INITIAL_CAPACITY, LineStore};
