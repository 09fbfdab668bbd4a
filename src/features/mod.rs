//! Feature implementations for rundist.
//!
//! - Distance calculator, saved sessions and history
//! - Shell completions

pub mod calculator;
pub mod completions;
