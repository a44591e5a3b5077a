//! Configuration loading and parsing for repackage.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config discovery from the working directory upwards
//! - Resolving CLI overrides, config values and built-in defaults
//! - The `--init` template

pub mod discovery;
pub mod parser;
pub mod template;
pub mod types;

pub use discovery::{
	CONFIG_FILE_NAME, discover_config, init_config_path, load_config, load_settings,
	resolve_settings,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, LoadedConfig, Overrides, Settings, SettingsSource};
