//! Console rendering of a finished run.

pub mod summary;

pub use summary::write_summary;
