//! CLI utilities for ifalias-persist.
//!
//! This module provides command-line argument parsing and logging setup for
//! the `ifalias-persist` binary.
//!
//! This module is only available with the `cli` feature.

pub mod args;
