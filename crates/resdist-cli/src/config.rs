//! Layered configuration: built-in defaults, an optional TOML file, `--set`
//! overrides and finally command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, default_config_path};
pub use models::{AppConfig, InputSource};
