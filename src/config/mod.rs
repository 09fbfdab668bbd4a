//! Configuration management for rundist.
//!
//! This module handles loading configuration from `~/.rundist/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{CalculatorConfig, ColorSetting, Config, GeneralConfig, DEFAULT_STORAGE_KEY};
