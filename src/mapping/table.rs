use crate::error::{RepackageError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
		.expect("qualified name pattern is valid")
});

/// A single old-name to new-name pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Mapping {
	/// Fully-qualified name before the reorganization.
	pub from: String,

	/// Fully-qualified name after the reorganization.
	pub to: String,
}

impl Mapping {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Mapping {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// Check whether `name` is a dotted Java identifier such as `com.example.Foo`.
pub fn is_qualified_name(name: &str) -> bool {
	QUALIFIED_NAME.is_match(name)
}

/// An ordered, validated mapping table.
///
/// Entries are applied in the order they appear. Once built the table
/// cannot be changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
	entries: Vec<Mapping>,
}

impl MappingTable {
	/// Build a table, rejecting empty, malformed or duplicate names.
	///
	/// Indexes in errors are 1-based to match the order entries are written
	/// in a config file.
	pub fn new(entries: Vec<Mapping>) -> Result<Self> {
		let mut seen: HashMap<&str, usize> = HashMap::new();

		for (i, mapping) in entries.iter().enumerate() {
			let index = i + 1;
			validate_name(index, "from", &mapping.from)?;
			validate_name(index, "to", &mapping.to)?;

			if let Some(first) = seen.insert(mapping.from.as_str(), index) {
				return Err(RepackageError::DuplicateMapping {
					name: mapping.from.clone(),
					first,
					second: index,
				});
			}

			if mapping.from == mapping.to {
				tracing::warn!(index, name = %mapping.from, "mapping does not change the name");
			}
		}

		Ok(MappingTable { entries })
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[Mapping] {
		&self.entries
	}
}

impl<'a> IntoIterator for &'a MappingTable {
	type Item = &'a Mapping;
	type IntoIter = std::slice::Iter<'a, Mapping>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

fn validate_name(index: usize, field: &'static str, name: &str) -> Result<()> {
	if name.is_empty() {
		return Err(RepackageError::EmptyMappingName { index, field });
	}

	if !is_qualified_name(name) {
		return Err(RepackageError::InvalidMappingName {
			index,
			field,
			name: name.to_string(),
		});
	}

	Ok(())
}
