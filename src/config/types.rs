use crate::error::{RepackageError, Result};
use crate::mapping::{Mapping, MappingTable};
use crate::rewrite::MatchMode;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.repackage.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// Source root, relative to the directory holding the config file.
	#[serde(default)]
	pub root: Option<PathBuf>,

	/// File extension to rewrite, with or without a leading dot.
	#[serde(default)]
	pub extension: Option<String>,

	/// How mapped names are matched.
	#[serde(default)]
	pub mode: Option<MatchMode>,

	/// Ordered mappings. Replaces the built-in table when present.
	#[serde(default)]
	pub mappings: Option<Vec<Mapping>>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
	Builtin,
	File(PathBuf),
}

/// Values given on the command line. Each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub root: Option<PathBuf>,
	pub extension: Option<String>,
	pub mode: Option<MatchMode>,
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
	pub root: PathBuf,
	pub extension: String,
	pub mode: MatchMode,
	pub table: MappingTable,
	pub source: SettingsSource,
}

impl Config {
	/// Validate the extension and mapping table without keeping the result.
	pub fn validate(&self) -> Result<()> {
		if let Some(ref extension) = self.extension {
			normalize_extension(extension)?;
		}
		if let Some(ref mappings) = self.mappings {
			MappingTable::new(mappings.clone())?;
		}
		Ok(())
	}
}

/// Strip a leading dot and reject empty extensions.
pub fn normalize_extension(extension: &str) -> Result<String> {
	let trimmed = extension.trim().trim_start_matches('.');
	if trimmed.is_empty() {
		return Err(RepackageError::EmptyExtension);
	}
	Ok(trimmed.to_string())
}
