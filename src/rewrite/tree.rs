use crate::error::{RepackageError, Result};
use crate::rewrite::report::{FileOutcome, RunSummary};
use crate::rewrite::substitution::Rewriter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where and how to run a rewrite.
#[derive(Debug, Clone)]
pub struct RunOptions {
	/// Directory to search recursively.
	pub root: PathBuf,

	/// File extension to rewrite, without the leading dot.
	pub extension: String,

	/// Compute results without writing anything.
	pub dry_run: bool,
}

/// Rewrite a single file in place.
///
/// The whole file is read and rewritten in memory before anything is
/// written, and it is only written if the content changed. Returns whether
/// the content changed.
pub fn rewrite_file(path: &Path, rewriter: &Rewriter, dry_run: bool) -> Result<bool> {
	let original = std::fs::read_to_string(path).map_err(|source| RepackageError::FileReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let rewritten = rewriter.rewrite(&original);
	if rewritten == original {
		return Ok(false);
	}

	if !dry_run {
		std::fs::write(path, rewritten).map_err(|source| RepackageError::FileWriteError {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(true)
}

/// Find candidate files under `root`, sorted by name at each level.
///
/// Entries that cannot be reached are yielded as errors so the caller can
/// report them and carry on.
pub fn candidate_files<'a>(
	root: &'a Path,
	extension: &'a str,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
	WalkDir::new(root)
		.follow_links(false)
		.sort_by_file_name()
		.into_iter()
		.filter_map(move |entry| match entry {
			Ok(entry) => {
				let is_candidate = entry.file_type().is_file()
					&& entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension);
				is_candidate.then(|| Ok(entry.into_path()))
			}
			Err(source) => {
				let path = source.path().unwrap_or(root).to_path_buf();
				Some(Err(RepackageError::WalkError { path, source }))
			}
		})
}

/// Rewrite every candidate file under the configured root.
///
/// `on_outcome` is called once per file as soon as it has been processed.
/// Per-file failures and unreachable directories are reported through it
/// and never stop the run; the only error returned is a root that is not a
/// directory.
pub fn rewrite_tree<F>(rewriter: &Rewriter, options: &RunOptions, mut on_outcome: F) -> Result<RunSummary>
where
	F: FnMut(&FileOutcome),
{
	if !options.root.is_dir() {
		return Err(RepackageError::RootNotFound {
			path: options.root.clone(),
		});
	}

	tracing::debug!(
		root = %options.root.display(),
		extension = %options.extension,
		mode = %rewriter.mode(),
		dry_run = options.dry_run,
		"starting rewrite"
	);

	let mut summary = RunSummary::new(options.dry_run);

	for candidate in candidate_files(&options.root, &options.extension) {
		let outcome = match candidate {
			Ok(path) => {
				tracing::debug!(path = %path.display(), "scanning");
				match rewrite_file(&path, rewriter, options.dry_run) {
					Ok(true) => FileOutcome::Updated { path },
					Ok(false) => FileOutcome::Unchanged { path },
					Err(error) => FileOutcome::Failed { path, error },
				}
			}
			Err(error) => {
				let path = match &error {
					RepackageError::WalkError { path, .. } => path.clone(),
					_ => options.root.clone(),
				};
				FileOutcome::Unreachable { path, error }
			}
		};

		match &outcome {
			FileOutcome::Updated { path } => {
				tracing::info!(path = %path.display(), dry_run = options.dry_run, "updated")
			}
			FileOutcome::Unchanged { path } => tracing::debug!(path = %path.display(), "unchanged"),
			FileOutcome::Failed { path, error } => {
				tracing::warn!(path = %path.display(), error = %error.detail(), "skipped")
			}
			FileOutcome::Unreachable { path, error } => {
				tracing::warn!(path = %path.display(), error = %error.detail(), "not traversed")
			}
		}

		on_outcome(&outcome);
		summary.record(&outcome);
	}

	Ok(summary)
}
