// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to decide which files are
//! rewritten. They are exposed publicly for use in other contexts.

mod extension;

pub use extension::has_selected_extension;
