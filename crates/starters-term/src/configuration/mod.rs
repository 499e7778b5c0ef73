//! Configuration management.
//!
//! Defaults, an optional toml config file, and CLI flags, layered in that
//! order.

mod config;

pub use config::Config;
pub use config::ConfigKey;
