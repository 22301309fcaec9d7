//! Human-readable output helpers.

pub mod table;
