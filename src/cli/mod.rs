//! Command-line interface for rundist.

pub mod args;
pub mod commands;
mod context;

pub use context::Context;
