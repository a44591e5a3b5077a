use crate::error::RepackageError;
use std::path::{Path, PathBuf};

/// What happened to a single candidate file.
#[derive(Debug)]
pub enum FileOutcome {
	/// No mapped name was found; the file was not written.
	Unchanged { path: PathBuf },

	/// Content changed and was written back (or would be, on a dry run).
	Updated { path: PathBuf },

	/// The file could not be read or written; it was skipped.
	Failed {
		path: PathBuf,
		error: RepackageError,
	},

	/// A directory entry could not be traversed. Not a candidate file, so it
	/// is not counted as scanned.
	Unreachable {
		path: PathBuf,
		error: RepackageError,
	},
}

impl FileOutcome {
	pub fn path(&self) -> &Path {
		match self {
			FileOutcome::Unchanged { path }
			| FileOutcome::Updated { path }
			| FileOutcome::Failed { path, .. }
			| FileOutcome::Unreachable { path, .. } => path,
		}
	}
}

/// A file that was attempted but skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
	pub path: PathBuf,

	/// Error message including its cause.
	pub message: String,
}

/// Totals for one run over a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
	/// Candidate files attempted, including ones that failed.
	pub scanned: usize,

	/// Files whose content changed, in traversal order.
	pub updated: Vec<PathBuf>,

	/// Files that were skipped because of an error.
	pub failed: Vec<FileFailure>,

	/// Directory entries that could not be traversed.
	pub walk_errors: Vec<FileFailure>,

	/// True if nothing was written to disk.
	pub dry_run: bool,
}

impl RunSummary {
	pub fn new(dry_run: bool) -> Self {
		RunSummary {
			dry_run,
			..Default::default()
		}
	}

	/// Fold one file's outcome into the totals.
	pub fn record(&mut self, outcome: &FileOutcome) {
		match outcome {
			FileOutcome::Unchanged { .. } => self.scanned += 1,
			FileOutcome::Updated { path } => {
				self.scanned += 1;
				self.updated.push(path.clone());
			}
			FileOutcome::Failed { path, error } => {
				self.scanned += 1;
				self.failed.push(FileFailure {
					path: path.clone(),
					message: error.detail(),
				});
			}
			FileOutcome::Unreachable { path, error } => self.record_walk_error(path, error),
		}
	}

	/// Note a directory entry that could not be traversed.
	pub fn record_walk_error(&mut self, path: &Path, error: &RepackageError) {
		self.walk_errors.push(FileFailure {
			path: path.to_path_buf(),
			message: error.detail(),
		});
	}

	pub fn updated_count(&self) -> usize {
		self.updated.len()
	}

	pub fn failed_count(&self) -> usize {
		self.failed.len()
	}

	pub fn walk_error_count(&self) -> usize {
		self.walk_errors.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_record_counts_every_outcome_as_scanned() {
		let mut summary = RunSummary::new(false);
		summary.record(&FileOutcome::Unchanged {
			path: PathBuf::from("A.java"),
		});
		summary.record(&FileOutcome::Updated {
			path: PathBuf::from("B.java"),
		});
		summary.record(&FileOutcome::Failed {
			path: PathBuf::from("C.java"),
			error: RepackageError::FileReadError {
				path: PathBuf::from("C.java"),
				source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
			},
		});

		assert_eq!(summary.scanned, 3);
		assert_eq!(summary.updated, vec![PathBuf::from("B.java")]);
		assert_eq!(summary.updated_count(), 1);
		assert_eq!(summary.failed_count(), 1);
		assert_eq!(summary.failed[0].message, "Failed to read C.java: bad utf-8");
	}

	#[test]
	fn test_outcome_path() {
		let outcome = FileOutcome::Updated {
			path: PathBuf::from("src/User.java"),
		};
		assert_eq!(outcome.path(), Path::new("src/User.java"));
	}

	#[test]
	fn test_unreachable_entry_is_not_scanned() {
		let mut summary = RunSummary::new(false);
		summary.record(&FileOutcome::Unchanged {
			path: PathBuf::from("A.java"),
		});
		summary.record(&FileOutcome::Unreachable {
			path: PathBuf::from("locked"),
			error: RepackageError::RootNotFound {
				path: PathBuf::from("locked"),
			},
		});

		assert_eq!(summary.scanned, 1);
		assert_eq!(summary.failed_count(), 0);
		assert_eq!(summary.walk_error_count(), 1);
		assert_eq!(summary.walk_errors[0].path, PathBuf::from("locked"));
	}
}
