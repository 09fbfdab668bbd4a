//! rundist - a running distance calculator
//!
//! This crate computes distance from duration and pace segments and keeps a
//! history of saved calculations in a local key-value store.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{distance, parse_time, Distance};
pub use error::RunDistError;
pub use features::calculator::{Calculator, History, Segment, Session};
pub use storage::{MemoryStore, SessionStore, SqliteStore};
