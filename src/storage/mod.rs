//! Storage layer for rundist.
//!
//! Session history is kept in a key-value table inside a local `SQLite`
//! database, behind the [`SessionStore`] trait.

mod kv;
mod migrations;

#[cfg(test)]
pub use kv::MockSessionStore;
pub use kv::{MemoryStore, SessionStore, SqliteStore};
