use std::path::PathBuf;

/// Library-level structured errors for repackage.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RepackageError {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Mapping {index} has an empty `{field}` value")]
	EmptyMappingName { index: usize, field: &'static str },

	#[error("Mapping {index} has an invalid qualified name in `{field}`: {name}")]
	InvalidMappingName {
		index: usize,
		field: &'static str,
		name: String,
	},

	#[error("Duplicate mapping for `{name}` (entries {first} and {second})")]
	DuplicateMapping {
		name: String,
		first: usize,
		second: usize,
	},

	#[error("File extension must not be empty")]
	EmptyExtension,

	#[error("Invalid match pattern for `{name}`")]
	InvalidPattern {
		name: String,
		#[source]
		source: regex::Error,
	},

	#[error("Source root is not a directory: {path}")]
	RootNotFound { path: PathBuf },

	#[error("Failed to read {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to traverse {path}")]
	WalkError {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},
}

impl RepackageError {
	/// The error message including its underlying cause, on one line.
	///
	/// Per-file failures are reported as a single status line, so the
	/// `#[source]` chain is flattened here instead of by `anyhow`.
	pub fn detail(&self) -> String {
		match std::error::Error::source(self) {
			Some(source) => format!("{self}: {source}"),
			None => self.to_string(),
		}
	}
}

/// Result type alias using RepackageError.
pub type Result<T> = std::result::Result<T, RepackageError>;
