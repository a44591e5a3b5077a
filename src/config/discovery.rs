use crate::config::parser::parse_config_file;
use crate::config::types::{
	LoadedConfig, Overrides, Settings, SettingsSource, normalize_extension,
};
use crate::error::{RepackageError, Result};
use crate::mapping::builtin::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use crate::mapping::{MappingTable, builtin_table};
use std::path::{Path, PathBuf};

/// Name of the config file searched for during discovery.
pub const CONFIG_FILE_NAME: &str = ".repackage.toml";

/// Find the nearest `.repackage.toml`, starting at `start_dir` and walking up.
///
/// The first file found wins; parent configs are not merged.
pub fn discover_config(start_dir: &Path) -> Result<Option<LoadedConfig>> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			tracing::debug!(path = %config_path.display(), "found config file");
			let config = parse_config_file(&config_path)?;
			return Ok(Some(LoadedConfig {
				config,
				path: config_path,
			}));
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			break;
		}
	}

	tracing::debug!(start = %start_dir.display(), "no config file found, using built-in defaults");
	Ok(None)
}

/// Load the explicitly given config file, or discover one from `cwd`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<LoadedConfig>> {
	match explicit {
		Some(path) => {
			let path = cwd.join(path);
			if !path.is_file() {
				return Err(RepackageError::ConfigNotFound { path });
			}
			let config = parse_config_file(&path)?;
			Ok(Some(LoadedConfig { config, path }))
		}
		None => discover_config(cwd),
	}
}

/// Combine command-line overrides, an optional config file and the built-in
/// defaults into the settings for a run.
///
/// A `--root` override is relative to `cwd`; a `root` in a config file is
/// relative to that file's directory.
pub fn resolve_settings(
	loaded: Option<&LoadedConfig>,
	overrides: &Overrides,
	cwd: &Path,
) -> Result<Settings> {
	let config = loaded.map(|l| &l.config);
	let config_dir = loaded
		.and_then(|l| l.path.parent())
		.map(Path::to_path_buf)
		.unwrap_or_else(|| cwd.to_path_buf());

	let root = match (&overrides.root, config.and_then(|c| c.root.as_ref())) {
		(Some(root), _) => cwd.join(root),
		(None, Some(root)) => config_dir.join(root),
		(None, None) => cwd.join(DEFAULT_ROOT),
	};

	let extension = overrides
		.extension
		.as_deref()
		.or_else(|| config.and_then(|c| c.extension.as_deref()))
		.unwrap_or(DEFAULT_EXTENSION);
	let extension = normalize_extension(extension)?;

	let mode = overrides
		.mode
		.or_else(|| config.and_then(|c| c.mode))
		.unwrap_or_default();

	let table = match config.and_then(|c| c.mappings.as_ref()) {
		Some(mappings) => MappingTable::new(mappings.clone())?,
		None => builtin_table(),
	};

	let source = match loaded {
		Some(l) => SettingsSource::File(l.path.clone()),
		None => SettingsSource::Builtin,
	};

	Ok(Settings {
		root,
		extension,
		mode,
		table,
		source,
	})
}

/// Discover, load and resolve settings in one step.
pub fn load_settings(explicit: Option<&Path>, overrides: &Overrides, cwd: &Path) -> Result<Settings> {
	let loaded = load_config(explicit, cwd)?;
	resolve_settings(loaded.as_ref(), overrides, cwd)
}

/// Path of the config file `--init` writes in `dir`.
pub fn init_config_path(dir: &Path) -> PathBuf {
	dir.join(CONFIG_FILE_NAME)
}
