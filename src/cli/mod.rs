//! Command line interface for the winnower pipeline.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
